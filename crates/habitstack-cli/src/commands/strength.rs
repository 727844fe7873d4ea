//! Habit strength command.

use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use habitstack_core::{Config, StrengthCalculator, StrengthScore, ValidationError};

use super::{habits_path, load_habits};

#[derive(Args)]
pub struct StrengthArgs {
    /// Only this habit
    #[arg(long)]
    id: Option<String>,
    /// Habit snapshot file
    #[arg(long)]
    habits: Option<PathBuf>,
    /// Print JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Row<'a> {
    id: &'a str,
    title: &'a str,
    #[serde(flatten)]
    strength: StrengthScore,
}

pub fn run(args: StrengthArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let habits = load_habits(&habits_path(args.habits)?)?;
    let calculator = StrengthCalculator::with_normalize(config.strength.normalize);

    if let Some(ref id) = args.id {
        if habits.get(id).is_none() {
            return Err(ValidationError::HabitNotFound(id.clone()).into());
        }
    }

    let rows: Vec<Row> = habits
        .iter()
        .filter(|h| args.id.as_deref().map_or(true, |id| h.id == id))
        .map(|h| Row {
            id: &h.id,
            title: &h.title,
            strength: calculator.calculate(h),
        })
        .collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for row in &rows {
        println!(
            "{:>3}  {:<12} {}",
            row.strength.score,
            row.strength.tier.label(),
            row.title
        );
    }
    Ok(())
}
