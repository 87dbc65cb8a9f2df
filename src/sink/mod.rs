//! Output Sinks
//!
//! - `registry`: one lock per category, created lazily
//! - `file`: console echo and monthly per-category files

pub mod file;
pub mod registry;

// Re-export sink types
pub use file::{log_file_path, Console, FileSink, Sink};
pub use registry::{CategoryLock, CategoryLockRegistry};
