use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/stacknav/config.toml` on Unix,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("stacknav").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: defaults are returned instead.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads and validates the config file at `path`, which must exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - `auto_expanded_min_width` is non-zero
    /// - `path_log_capacity` is non-zero
    /// - the log level is a plain level name
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layout.auto_expanded_min_width == 0 {
            return Err(ConfigError::ValidationError {
                message: "layout.auto_expanded_min_width must be greater than 0".to_string(),
            });
        }

        if self.navigation.path_log_capacity == 0 {
            return Err(ConfigError::ValidationError {
                message: "navigation.path_log_capacity must be greater than 0".to_string(),
            });
        }

        if LevelFilter::from_str(&self.logging.level).is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Unknown log level '{}'", self.logging.level),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn config_path_ends_with_app_dir() {
        let path = Config::config_path();
        assert!(path.ends_with("stacknav/config.toml"));
    }

    #[test]
    fn rejects_unknown_level() {
        let mut config = Config::default();
        config.logging.level = "chatty".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("chatty"));
    }
}
