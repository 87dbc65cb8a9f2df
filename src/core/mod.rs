//! Core logging primitives.
//!
//! Plain value types shared by the formatter, the sinks and the manager.
//! Nothing in here performs I/O.

pub mod level;
pub mod record;
pub mod sequence;

// Re-export core types
pub use level::{LogLevel, ParseLevelError, UNKNOWN_LEVEL_LABEL};
pub use record::{now_local, LogRecord};
pub use sequence::SequenceCounter;
