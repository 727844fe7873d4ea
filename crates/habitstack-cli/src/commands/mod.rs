//! CLI subcommands and the habit snapshot file they share.

pub mod config;
pub mod goal;
pub mod habit;
pub mod strength;
pub mod suggest;

use std::path::{Path, PathBuf};

use habitstack_core::storage::data_dir;
use habitstack_core::{HabitCollection, ValidationError};

/// Snapshot path: explicit `--habits` or `<data_dir>/habits.json`.
pub fn habits_path(custom: Option<PathBuf>) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match custom {
        Some(path) => Ok(path),
        None => Ok(data_dir()?.join("habits.json")),
    }
}

/// Read the snapshot. A missing file is an empty collection.
pub fn load_habits(path: &Path) -> Result<HabitCollection, Box<dyn std::error::Error>> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let habits: HabitCollection = serde_json::from_str(&content)?;
            tracing::debug!(path = %path.display(), count = habits.len(), "loaded habit snapshot");
            Ok(habits)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HabitCollection::new()),
        Err(err) => Err(format!("failed to read {}: {err}", path.display()).into()),
    }
}

pub fn save_habits(
    path: &Path,
    habits: &HabitCollection,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string_pretty(habits)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Parse "HH:MM".
pub fn parse_time(value: &str) -> Result<chrono::NaiveTime, Box<dyn std::error::Error>> {
    chrono::NaiveTime::parse_from_str(value, "%H:%M").map_err(|_| {
        ValidationError::invalid_value("time", format!("'{value}', expected HH:MM")).into()
    })
}
