//! Log Levels
//!
//! Severity values used for filtering. Ordering is significant:
//! a record is emitted only when its level is at least the configured minimum.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Label used for raw level values outside the known set.
pub const UNKNOWN_LEVEL_LABEL: &str = "UNKNOWN";

/// Severity of a log record.
///
/// Totally ordered: `Debug < Error < System`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    /// Development chatter
    #[default]
    Debug = 0,
    /// Recoverable failures
    Error = 1,
    /// Server lifecycle and always-on records
    System = 2,
}

impl LogLevel {
    /// Label written into log lines.
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Error => "ERROR",
            LogLevel::System => "SYSTEM",
        }
    }

    /// Convert from the raw wire/config value.
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LogLevel::Debug),
            1 => Some(LogLevel::Error),
            2 => Some(LogLevel::System),
            _ => None,
        }
    }

    /// Label for a raw level value, `UNKNOWN` when out of range.
    pub fn label_for_raw(value: u8) -> &'static str {
        Self::from_u8(value)
            .map(LogLevel::as_str)
            .unwrap_or(UNKNOWN_LEVEL_LABEL)
    }

    /// Whether a record at this level passes a `min` filter.
    #[inline]
    pub fn passes(self, min: LogLevel) -> bool {
        self >= min
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a level from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown log level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    /// Accepts level names in any case, or the numeric values `0`..`2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(raw) = trimmed.parse::<u8>() {
            return LogLevel::from_u8(raw).ok_or_else(|| ParseLevelError(s.to_string()));
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "error" => Ok(LogLevel::Error),
            "system" => Ok(LogLevel::System),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}
