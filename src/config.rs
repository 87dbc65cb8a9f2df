//! Logger Configuration
//!
//! Two settings: the root directory for category files and the minimum
//! emitted level. Set once at startup, before the logger is shared.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::level::{LogLevel, ParseLevelError};

/// Environment variable naming the log directory.
pub const ENV_LOG_DIR: &str = "GAME_LOG_DIR";

/// Environment variable naming the minimum level.
pub const ENV_LOG_LEVEL: &str = "GAME_LOG_LEVEL";

/// Logger configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Root directory for category files. Empty means the working directory.
    pub directory: PathBuf,
    /// Records below this level are dropped.
    pub min_level: LogLevel,
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// File that was read
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid JSON for this shape.
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),

    /// Level value not recognized.
    #[error(transparent)]
    Level(#[from] ParseLevelError),
}

impl LogConfig {
    /// Create a config.
    pub fn new(directory: impl Into<PathBuf>, min_level: LogLevel) -> Self {
        Self {
            directory: directory.into(),
            min_level,
        }
    }

    /// Create config from environment variables.
    ///
    /// Unset variables keep their defaults; a set but unknown level is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var(ENV_LOG_DIR) {
            config.directory = PathBuf::from(dir);
        }
        if let Ok(level) = std::env::var(ENV_LOG_LEVEL) {
            config.min_level = level.parse()?;
        }

        Ok(config)
    }

    /// Parse config from JSON text, e.g. `{"directory": "Logs", "min_level": "error"}`.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.directory, PathBuf::new());
        assert_eq!(config.min_level, LogLevel::Debug);
    }

    #[test]
    fn test_env_config() {
        // Only test touching these variables; steps run in one thread
        std::env::remove_var(ENV_LOG_DIR);
        std::env::remove_var(ENV_LOG_LEVEL);
        assert_eq!(LogConfig::from_env().unwrap(), LogConfig::default());

        std::env::set_var(ENV_LOG_DIR, "Logs");
        std::env::set_var(ENV_LOG_LEVEL, "SyStEm");
        assert_eq!(LogConfig::from_env().unwrap(), LogConfig::new("Logs", LogLevel::System));

        std::env::set_var(ENV_LOG_LEVEL, "1");
        assert_eq!(LogConfig::from_env().unwrap().min_level, LogLevel::Error);

        std::env::set_var(ENV_LOG_LEVEL, "3");
        assert!(matches!(LogConfig::from_env(), Err(ConfigError::Level(_))));

        std::env::set_var(ENV_LOG_LEVEL, "verbose");
        assert!(matches!(LogConfig::from_env(), Err(ConfigError::Level(_))));

        std::env::remove_var(ENV_LOG_DIR);
        std::env::remove_var(ENV_LOG_LEVEL);
    }

    #[test]
    fn test_json_config() {
        let config = LogConfig::from_json_str(r#"{"directory": "Logs", "min_level": "error"}"#).unwrap();
        assert_eq!(config, LogConfig::new("Logs", LogLevel::Error));

        // Missing fields fall back to defaults
        let config = LogConfig::from_json_str(r#"{"min_level": "system"}"#).unwrap();
        assert_eq!(config.directory, PathBuf::new());
        assert_eq!(config.min_level, LogLevel::System);
    }

    #[test]
    fn test_json_config_rejects_unknown_level() {
        let result = LogConfig::from_json_str(r#"{"min_level": "verbose"}"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_json_file_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.json");
        std::fs::write(&path, r#"{"directory": "Logs"}"#).unwrap();

        let config = LogConfig::from_json_file(&path).unwrap();
        assert_eq!(config.directory, PathBuf::from("Logs"));

        let missing = LogConfig::from_json_file(dir.path().join("absent.json"));
        assert!(matches!(missing, Err(ConfigError::Read { .. })));
    }
}
