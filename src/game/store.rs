//! Game Log Persistence
//!
//! Storage is the backend's business. The logger side only hands over
//! fully populated records and does not validate or retry.

use thiserror::Error;

use super::record::GameLog;
use crate::sink::file::Console;

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum GameLogError {
    /// Record could not be encoded.
    #[error("serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backend refused or failed to store the record.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Durable destination for game logs (usually a database).
pub trait GameLogStore: Send + Sync {
    /// Persist one record.
    fn save(&self, log: &GameLog) -> Result<(), GameLogError>;
}

/// Stand-in store that prints each record.
#[derive(Clone, Debug, Default)]
pub struct ConsoleGameLogStore {
    console: Console,
}

impl ConsoleGameLogStore {
    /// Create a store printing to `console`.
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl GameLogStore for ConsoleGameLogStore {
    fn save(&self, log: &GameLog) -> Result<(), GameLogError> {
        self.console.write(&format!("GameLog Saved: {}\n", log));
        Ok(())
    }
}
