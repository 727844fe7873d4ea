//! TOML-based engine configuration.
//!
//! Stores user preferences for the recommendation engine:
//! - Stress threshold used by the context classifier
//! - Suggestion count and personality affinity
//! - Strength score normalization
//! - Goal selection seed
//!
//! Configuration is stored at `<data_dir>/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::data_dir;
use crate::context::{DEFAULT_STRESS_MOOD_THRESHOLD, MAX_MOOD};
use crate::error::{ConfigError, Result};
use crate::suggest::SuggestionEngine;

/// Context classifier configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Mood at or below this value is stressful (0-4)
    #[serde(default = "default_stress_mood_threshold")]
    pub stress_mood_threshold: u8,
}

/// Suggestion configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuggestionsConfig {
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Personality affinity tag, e.g. "achiever" or "calm"
    #[serde(default)]
    pub personality: Option<String>,
}

/// Strength calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StrengthConfig {
    /// Divide the raw weighted sum by 1.20
    #[serde(default)]
    pub normalize: bool,
}

/// Goal template configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalsConfig {
    /// Fixed seed for reproducible goal selection
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Application configuration.
///
/// Serialized to/from TOML at `<data_dir>/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub context: ContextConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
    #[serde(default)]
    pub strength: StrengthConfig,
    #[serde(default)]
    pub goals: GoalsConfig,
}

fn default_stress_mood_threshold() -> u8 {
    DEFAULT_STRESS_MOOD_THRESHOLD
}
fn default_max_suggestions() -> usize {
    3
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            stress_mood_threshold: default_stress_mood_threshold(),
        }
    }
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
            personality: None,
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    fn set_json_value_by_path(
        root: &mut serde_json::Value,
        key: &str,
        value: &str,
        optional: bool,
    ) -> Result<(), ConfigError> {
        let unknown = || ConfigError::UnknownKey(key.to_string());
        let invalid = |message: String| ConfigError::InvalidValue {
            key: key.to_string(),
            message,
        };

        let mut parts = key.split('.').peekable();
        if parts.peek().is_none() || key.is_empty() {
            return Err(unknown());
        }

        let mut current = root;
        while let Some(part) = parts.next() {
            let is_leaf = parts.peek().is_none();
            if is_leaf {
                let obj = current.as_object_mut().ok_or_else(unknown)?;
                let existing = obj.get(part).ok_or_else(unknown)?;

                let new_value = match existing {
                    // "none" clears an optional whether it is set or not
                    _ if optional && value.eq_ignore_ascii_case("none") => serde_json::Value::Null,
                    serde_json::Value::Bool(_) => serde_json::Value::Bool(
                        value
                            .parse::<bool>()
                            .map_err(|_| invalid(format!("cannot parse '{value}' as bool")))?,
                    ),
                    serde_json::Value::Number(_) => value
                        .parse::<u64>()
                        .map(|n| serde_json::Value::Number(n.into()))
                        .map_err(|_| invalid(format!("cannot parse '{value}' as number")))?,
                    // Unset optional: infer the type from the text
                    serde_json::Value::Null => match value.parse::<u64>() {
                        Ok(n) => serde_json::Value::Number(n.into()),
                        Err(_) => serde_json::Value::String(value.into()),
                    },
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        return Err(invalid("cannot overwrite a section".to_string()));
                    }
                    _ => serde_json::Value::String(value.into()),
                };

                obj.insert(part.to_string(), new_value);
                return Ok(());
            }

            current = current.get_mut(part).ok_or_else(unknown)?;
        }

        Err(unknown())
    }

    /// Default config file location.
    pub fn path() -> Result<PathBuf> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from the default location, writing defaults if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load from an explicit path, writing defaults if missing.
    pub fn load_from(path: &Path) -> Result<Self> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg: Config = toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                })?;
                cfg.validate()?;
                Ok(cfg)
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                let cfg = Self::default();
                cfg.save_to(path)?;
                Ok(cfg)
            }
            Err(err) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
            .into()),
        }
    }

    /// Persist to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Persist to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::SaveFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Ok(())
    }

    /// Load from disk, returning default on error.
    /// This is a convenience method that never fails.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            tracing::warn!(error = %err, "using default configuration");
            Self::default()
        })
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.context.stress_mood_threshold > MAX_MOOD {
            return Err(ConfigError::InvalidValue {
                key: "context.stress_mood_threshold".to_string(),
                message: format!("must be between 0 and {MAX_MOOD}"),
            });
        }
        if self.suggestions.max_suggestions == 0 {
            return Err(ConfigError::InvalidValue {
                key: "suggestions.max_suggestions".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by key in memory. Returns error if key is unknown
    /// or the value does not fit.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut json = serde_json::to_value(&*self)?;
        let defaults = serde_json::to_value(Self::default())?;
        let optional = matches!(
            Self::get_json_value_by_path(&defaults, key),
            Some(serde_json::Value::Null)
        );
        Self::set_json_value_by_path(&mut json, key, value, optional)?;
        let updated: Config = serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })?;
        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Flattened `key = value` pairs for display.
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        if let Ok(serde_json::Value::Object(sections)) = serde_json::to_value(self) {
            for (section, fields) in sections {
                if let serde_json::Value::Object(fields) = fields {
                    for (name, value) in fields {
                        let rendered = match value {
                            serde_json::Value::String(s) => s,
                            other => other.to_string(),
                        };
                        out.push((format!("{section}.{name}"), rendered));
                    }
                }
            }
        }
        out
    }

    /// Suggestion engine configured from this config.
    pub fn suggestion_engine(&self) -> SuggestionEngine {
        SuggestionEngine::new().with_max_suggestions(self.suggestions.max_suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, cfg);
        assert_eq!(parsed.context.stress_mood_threshold, 2);
        assert_eq!(parsed.suggestions.max_suggestions, 3);
    }

    #[test]
    fn empty_file_uses_defaults() {
        let parsed: Config = toml::from_str("").unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("strength.normalize").as_deref(), Some("false"));
        assert_eq!(cfg.get("suggestions.max_suggestions").as_deref(), Some("3"));
        assert_eq!(cfg.get("goals.seed").as_deref(), Some("null"));
        assert!(cfg.get("strength.missing_key").is_none());
    }

    #[test]
    fn set_updates_bool_and_number() {
        let mut cfg = Config::default();
        cfg.set("strength.normalize", "true").unwrap();
        cfg.set("context.stress_mood_threshold", "1").unwrap();
        assert!(cfg.strength.normalize);
        assert_eq!(cfg.context.stress_mood_threshold, 1);
    }

    #[test]
    fn set_fills_and_clears_optionals() {
        let mut cfg = Config::default();
        cfg.set("goals.seed", "42").unwrap();
        cfg.set("suggestions.personality", "calm").unwrap();
        assert_eq!(cfg.goals.seed, Some(42));
        assert_eq!(cfg.suggestions.personality.as_deref(), Some("calm"));

        cfg.set("suggestions.personality", "none").unwrap();
        assert_eq!(cfg.suggestions.personality, None);
    }

    #[test]
    fn set_clears_numeric_optional() {
        let mut cfg = Config::default();
        cfg.set("goals.seed", "42").unwrap();
        assert_eq!(cfg.goals.seed, Some(42));

        cfg.set("goals.seed", "none").unwrap();
        assert_eq!(cfg.goals.seed, None);
        assert_eq!(cfg.get("goals.seed").as_deref(), Some("null"));

        cfg.set("goals.seed", "9").unwrap();
        assert_eq!(cfg.goals.seed, Some(9));
    }

    #[test]
    fn set_none_on_required_number_is_rejected() {
        let mut cfg = Config::default();
        assert!(cfg.set("suggestions.max_suggestions", "none").is_err());
        assert_eq!(cfg.suggestions.max_suggestions, 3);
    }

    #[test]
    fn set_rejects_unknown_key() {
        let mut cfg = Config::default();
        assert!(cfg.set("ui.dark_mode", "true").is_err());
        assert!(cfg.set("", "true").is_err());
    }

    #[test]
    fn set_rejects_invalid_type() {
        let mut cfg = Config::default();
        assert!(cfg.set("strength.normalize", "maybe").is_err());
        assert!(cfg.set("context.stress_mood_threshold", "-1").is_err());
    }

    #[test]
    fn set_rejects_out_of_range() {
        let mut cfg = Config::default();
        assert!(cfg.set("context.stress_mood_threshold", "9").is_err());
        assert!(cfg.set("suggestions.max_suggestions", "0").is_err());
        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn load_from_missing_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());
    }

    #[test]
    fn save_then_load_preserves_changes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut cfg = Config::default();
        cfg.set("goals.seed", "7").unwrap();
        cfg.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().goals.seed, Some(7));
    }

    #[test]
    fn load_from_invalid_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "context = 5").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn entries_flatten_sections() {
        let entries = Config::default().entries();
        assert!(entries.contains(&("strength.normalize".to_string(), "false".to_string())));
        assert!(entries.iter().any(|(k, _)| k == "context.stress_mood_threshold"));
    }
}
