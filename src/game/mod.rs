//! Game Event Logs
//!
//! Structured player-action records and the storage interface they are
//! handed to. Separate from the text logger: these are meant for querying
//! player history, not for reading on a console.
//!
//! ## Module Structure
//!
//! - `record`: the `GameLog` record
//! - `store`: `GameLogStore` trait and a console stand-in

pub mod record;
pub mod store;

// Re-export key types
pub use record::GameLog;
pub use store::{ConsoleGameLogStore, GameLogError, GameLogStore};
