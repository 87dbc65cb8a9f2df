//! # Relic Syslog
//!
//! Leveled, category-serialized text logging for game servers.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       RELIC SYSLOG                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Value types                              │
//! │  ├── level.rs    - DEBUG < ERROR < SYSTEM                   │
//! │  ├── record.rs   - Per-call log record                      │
//! │  └── sequence.rs - Global record counter                    │
//! │                                                             │
//! │  format/         - Pure rendering                           │
//! │  ├── line.rs     - Bounded message + canonical line         │
//! │  └── hex.rs      - 16-byte hex/ASCII dump                   │
//! │                                                             │
//! │  sink/           - Output                                   │
//! │  ├── registry.rs - One lock per category                    │
//! │  └── file.rs     - Console echo + YYYYMM_<category>.txt     │
//! │                                                             │
//! │  manager.rs      - LogManager facade                        │
//! │  config.rs       - Directory + minimum level                │
//! │  game/           - Structured game logs and their store     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ordering Guarantee
//!
//! - Every accepted text record gets a sequence number, unique and
//!   increasing across all categories.
//! - Within one category file, lines appear in sequence order.
//! - Across categories, files are independent; merge them by sequence
//!   number to rebuild the global order.
//!
//! Logging never fails the caller: formatting errors and file errors are
//! reported on the console and the record is dropped.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod config;
pub mod core;
pub mod format;
pub mod game;
pub mod manager;
pub mod sink;

// Re-export commonly used types
pub use config::{ConfigError, LogConfig};
pub use crate::core::level::LogLevel;
pub use crate::core::sequence::SequenceCounter;
pub use format::line::{FormatError, MAX_MESSAGE_CHARS};
pub use game::{ConsoleGameLogStore, GameLog, GameLogError, GameLogStore};
pub use manager::{LogInitError, LogManager, LogOutcome};
pub use sink::{CategoryLockRegistry, Console, FileSink, Sink};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
