mod config;

pub use config::{Config, ContextConfig, GoalsConfig, StrengthConfig, SuggestionsConfig};

use std::path::PathBuf;

/// Returns the Habitstack data directory, creating it if needed.
///
/// `HABITSTACK_DATA_DIR` overrides the location. Otherwise the directory is
/// `~/.config/habitstack[-dev]/`, with `HABITSTACK_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("HABITSTACK_DATA_DIR") {
        Some(custom) => PathBuf::from(custom),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("HABITSTACK_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("habitstack-dev")
            } else {
                base_dir.join("habitstack")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
