//! Configuration file support for the checkup library.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/checkup/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Library configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Measurement validation policy
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct ValidationConfig {
    /// Reject non-positive or non-finite height/weight in checkups
    #[serde(default)]
    pub strict: bool,
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::info!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
            None => {
                tracing::info!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("checkup").join("config.toml"))
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.validation.strict);
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert!(!config.validation.strict);
    }

    #[test]
    fn test_strict_config() {
        let toml_str = r#"
[validation]
strict = true
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert!(config.validation.strict);
    }

    #[test]
    fn test_to_toml_parses_back() {
        let mut config = Config::default();
        config.validation.strict = true;
        let parsed: Config = toml::from_str(&config.to_toml().unwrap()).unwrap();
        assert!(parsed.validation.strict);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[validation]\nstrict = true\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.validation.strict);
    }

    #[test]
    fn test_load_from_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_load_from_malformed_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[validation\nstrict = ").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Toml(_))));
    }
}
