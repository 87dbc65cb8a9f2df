//! Log Manager
//!
//! Entry point for producers. One instance is built at startup, configured,
//! then shared (usually behind an `Arc`) with every thread that logs.
//!
//! ## Write Path
//!
//! ```text
//! log(category, level, args)
//!   ├── level < min_level?        → Filtered (no clock, no counter, no I/O)
//!   ├── render message (bounded)  → FormatFailed on overflow
//!   ├── registry.get_or_create(category)
//!   └── category lock held:
//!       ├── sequence.next()
//!       ├── format line
//!       ├── console echo
//!       └── append to <dir>/<YYYYMM>_<category>.txt
//! ```
//!
//! Logging never returns an error to the caller. The returned [`LogOutcome`]
//! only reports what happened.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::config::LogConfig;
use crate::core::level::LogLevel;
use crate::core::record::{now_local, LogRecord};
use crate::core::sequence::SequenceCounter;
use crate::format::hex::hex_dump;
use crate::format::line::{format_hex_header, format_line, render_message};
use crate::sink::file::{log_file_path, FileSink, Sink};
use crate::sink::registry::CategoryLockRegistry;

/// Initialization errors.
#[derive(Debug, Error)]
pub enum LogInitError {
    /// Log directory could not be created.
    #[error("failed to create log directory {path}: {source}")]
    CreateDirectory {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// What a logging call did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogOutcome {
    /// Level below the configured minimum. Nothing happened.
    Filtered,
    /// Category name unusable as a file name. Nothing written.
    Rejected,
    /// Message rendering failed. Nothing written.
    FormatFailed,
    /// Echoed and appended to the category file.
    Written {
        /// Sequence number, `None` for hex records
        sequence: Option<u64>,
    },
    /// Echoed, but the file append failed and was skipped.
    FileSkipped {
        /// Sequence number, `None` for hex records
        sequence: Option<u64>,
    },
}

impl LogOutcome {
    /// Whether the record reached the category file.
    pub fn is_written(&self) -> bool {
        matches!(self, LogOutcome::Written { .. })
    }

    /// Sequence number stamped on the record, if any.
    pub fn sequence(&self) -> Option<u64> {
        match self {
            LogOutcome::Written { sequence } | LogOutcome::FileSkipped { sequence } => *sequence,
            _ => None,
        }
    }
}

/// Reason a category name cannot be used.
fn invalid_category_reason(category: &str) -> Option<&'static str> {
    if category.is_empty() {
        Some("empty category")
    } else if category.contains(['/', '\\']) {
        Some("path separator in category")
    } else if category.contains('\0') {
        Some("NUL in category")
    } else if category.contains("..") {
        Some("parent reference in category")
    } else {
        None
    }
}

/// Leveled, category-serialized logger.
pub struct LogManager {
    config: LogConfig,
    registry: CategoryLockRegistry,
    sequence: SequenceCounter,
    sink: Box<dyn Sink>,
}

impl fmt::Debug for LogManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogManager")
            .field("config", &self.config)
            .field("categories", &self.registry.len())
            .field("last_sequence", &self.sequence.last())
            .finish_non_exhaustive()
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}

impl LogManager {
    /// Create a logger with default settings writing to stdout and the
    /// working directory. Performs no I/O.
    pub fn new() -> Self {
        Self::from_parts(LogConfig::default(), Box::new(FileSink::default()))
    }

    /// Create and initialize a logger.
    pub fn with_config(config: LogConfig) -> Result<Self, LogInitError> {
        Self::with_sink(config, FileSink::default())
    }

    /// Create and initialize a logger with a custom sink.
    pub fn with_sink(config: LogConfig, sink: impl Sink + 'static) -> Result<Self, LogInitError> {
        let mut manager = Self::from_parts(LogConfig::default(), Box::new(sink));
        manager.initialize(config.directory, config.min_level)?;
        Ok(manager)
    }

    fn from_parts(config: LogConfig, sink: Box<dyn Sink>) -> Self {
        Self {
            config,
            registry: CategoryLockRegistry::new(),
            sequence: SequenceCounter::new(),
            sink,
        }
    }

    /// Set directory and minimum level. Safe to call repeatedly.
    pub fn initialize(
        &mut self,
        directory: impl Into<PathBuf>,
        min_level: LogLevel,
    ) -> Result<(), LogInitError> {
        self.set_directory(directory)?;
        self.set_min_level(min_level);
        Ok(())
    }

    /// Set the log directory, creating it if missing.
    ///
    /// An empty path selects the working directory and creates nothing.
    pub fn set_directory(&mut self, directory: impl Into<PathBuf>) -> Result<(), LogInitError> {
        let directory = directory.into();

        if !directory.as_os_str().is_empty() {
            std::fs::create_dir_all(&directory).map_err(|source| LogInitError::CreateDirectory {
                path: directory.clone(),
                source,
            })?;
        }

        info!(directory = %directory.display(), "log directory set");
        self.config.directory = directory;
        Ok(())
    }

    /// Set the minimum emitted level.
    pub fn set_min_level(&mut self, level: LogLevel) {
        self.config.min_level = level;
    }

    /// Current configuration.
    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Log directory.
    pub fn directory(&self) -> &Path {
        &self.config.directory
    }

    /// Minimum emitted level.
    pub fn min_level(&self) -> LogLevel {
        self.config.min_level
    }

    /// File that `category` records are appended to this month.
    pub fn log_file_path(&self, category: &str) -> PathBuf {
        log_file_path(&self.config.directory, category, now_local())
    }

    /// Number of categories that have logged at least once.
    pub fn category_count(&self) -> usize {
        self.registry.len()
    }

    /// Last sequence number handed out, `0` if none.
    pub fn last_sequence(&self) -> u64 {
        self.sequence.last()
    }

    /// Whether a record at `level` would be emitted.
    #[inline]
    pub fn enabled(&self, level: LogLevel) -> bool {
        level.passes(self.config.min_level)
    }

    /// Log a formatted message. See also the [`syslog!`](crate::syslog) macro.
    pub fn log(&self, category: &str, level: LogLevel, args: fmt::Arguments<'_>) -> LogOutcome {
        if !self.enabled(level) {
            return LogOutcome::Filtered;
        }
        if let Some(reason) = invalid_category_reason(category) {
            return self.reject(category, reason);
        }

        let message = match render_message(args) {
            Ok(message) => message,
            Err(err) => {
                self.sink
                    .echo(&format!("[LOG ERROR] String formatting failed: {}\n", err));
                warn!(category, error = %err, "dropped log record");
                return LogOutcome::FormatFailed;
            }
        };

        let lock = self.registry.get_or_create(category);
        let _guard = lock.lock();

        // Numbered under the category lock so file order matches sequence order
        let timestamp = now_local();
        let sequence = self.sequence.next();
        let line = format_line(&LogRecord::new(category, level, timestamp, sequence, &message));

        self.sink.echo(&line);
        let path = log_file_path(&self.config.directory, category, timestamp);
        self.append(category, &path, &line, Some(sequence))
    }

    /// Log a preformatted message.
    pub fn log_str(&self, category: &str, level: LogLevel, message: &str) -> LogOutcome {
        self.log(category, level, format_args!("{}", message))
    }

    /// Log `description` followed by a hex/ASCII dump of `data`.
    ///
    /// Hex records are level filtered but take no sequence number.
    pub fn log_hex(
        &self,
        category: &str,
        level: LogLevel,
        description: &str,
        data: &[u8],
    ) -> LogOutcome {
        if !self.enabled(level) {
            return LogOutcome::Filtered;
        }
        if let Some(reason) = invalid_category_reason(category) {
            return self.reject(category, reason);
        }

        let dump = hex_dump(data);
        let lock = self.registry.get_or_create(category);
        let _guard = lock.lock();

        let timestamp = now_local();
        let mut text = format_hex_header(category, level, timestamp, description);
        text.push_str(&dump);

        self.sink.echo(&text);
        let path = log_file_path(&self.config.directory, category, timestamp);
        self.append(category, &path, &text, None)
    }

    fn reject(&self, category: &str, reason: &str) -> LogOutcome {
        self.sink
            .echo(&format!("[LOG ERROR] Invalid category {:?}: {}\n", category, reason));
        warn!(category, reason, "rejected log record");
        LogOutcome::Rejected
    }

    fn append(&self, category: &str, path: &Path, text: &str, sequence: Option<u64>) -> LogOutcome {
        match self.sink.append(path, text) {
            Ok(()) => LogOutcome::Written { sequence },
            Err(err) => {
                warn!(category, path = %path.display(), error = %err, "skipped log file write");
                LogOutcome::FileSkipped { sequence }
            }
        }
    }
}

/// Log a formatted message through a [`LogManager`].
///
/// ```no_run
/// use relic_syslog::{syslog, LogLevel, LogManager};
///
/// let logger = LogManager::new();
/// syslog!(logger, "System", LogLevel::Error, "Hello, {}! Your score is {}.", "Player1", 100);
/// ```
#[macro_export]
macro_rules! syslog {
    ($logger:expr, $category:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($category, $level, ::std::format_args!($($arg)+))
    };
}

// =============================================================================
// TESTS
// =============================================================================
