//! Console and File Sinks
//!
//! Every accepted record goes to the console and is appended to
//! `<directory>/<YYYYMM>_<category>.txt`. The file is opened, appended and
//! closed on every write, so a new month simply lands in a new file.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDateTime;
use parking_lot::Mutex;

/// Month bucket used in file names.
pub const MONTH_FORMAT: &str = "%Y%m";

/// Extension of category log files.
pub const LOG_FILE_EXTENSION: &str = "txt";

/// Path of the file holding `category` records for the month of `at`.
pub fn log_file_path(directory: &Path, category: &str, at: NaiveDateTime) -> PathBuf {
    directory.join(format!(
        "{}_{}.{}",
        at.format(MONTH_FORMAT),
        category,
        LOG_FILE_EXTENSION
    ))
}

/// Destination of the console echo.
#[derive(Clone, Debug, Default)]
pub enum Console {
    /// Process standard output
    #[default]
    Stdout,
    /// Discard console output
    Null,
    /// Collect console output in memory
    Capture(Arc<Mutex<String>>),
}

impl Console {
    /// Create a capturing console and the buffer it writes to.
    pub fn capture() -> (Self, Arc<Mutex<String>>) {
        let buffer = Arc::new(Mutex::new(String::new()));
        (Console::Capture(buffer.clone()), buffer)
    }

    /// Write `text` as-is. Failures are ignored.
    pub fn write(&self, text: &str) {
        match self {
            Console::Stdout => {
                let mut out = io::stdout().lock();
                let _ = out.write_all(text.as_bytes());
                let _ = out.flush();
            }
            Console::Null => {}
            Console::Capture(buffer) => buffer.lock().push_str(text),
        }
    }
}

/// Output side of the logger.
///
/// `append` is only called while the category's lock is held, so
/// implementations must not log through the manager.
pub trait Sink: Send + Sync {
    /// Echo rendered text to the console.
    fn echo(&self, text: &str);

    /// Append rendered text to the file at `path`.
    fn append(&self, path: &Path, text: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn echo(&self, text: &str) {
        (**self).echo(text)
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        (**self).append(path, text)
    }
}

impl<S: Sink + ?Sized> Sink for Box<S> {
    fn echo(&self, text: &str) {
        (**self).echo(text)
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        (**self).append(path, text)
    }
}

/// Console echo plus open/append/close file writes.
#[derive(Clone, Debug, Default)]
pub struct FileSink {
    console: Console,
}

impl FileSink {
    /// Create a sink echoing to `console`.
    pub fn new(console: Console) -> Self {
        Self { console }
    }
}

impl Sink for FileSink {
    fn echo(&self, text: &str) {
        self.console.write(text);
    }

    fn append(&self, path: &Path, text: &str) -> io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(text.as_bytes())?;
        // Handle closes on drop
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(year: i32, month: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_file_name_uses_month_bucket() {
        let path = log_file_path(Path::new("Logs"), "System", at(2024, 12));
        assert_eq!(path, PathBuf::from("Logs").join("202412_System.txt"));

        let path = log_file_path(Path::new("Logs"), "System", at(2025, 1));
        assert_eq!(path, PathBuf::from("Logs").join("202501_System.txt"));
    }

    #[test]
    fn test_empty_directory_is_relative() {
        let path = log_file_path(Path::new(""), "Battle", at(2024, 3));
        assert_eq!(path, PathBuf::from("202403_Battle.txt"));
    }

    #[test]
    fn test_append_accumulates() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path(dir.path(), "System", at(2024, 12));
        let sink = FileSink::new(Console::Null);

        sink.append(&path, "first\n").unwrap();
        sink.append(&path, "second\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn test_append_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = log_file_path(&dir.path().join("absent"), "System", at(2024, 12));
        let sink = FileSink::new(Console::Null);

        assert!(sink.append(&path, "line\n").is_err());
    }

    #[test]
    fn test_capture_console() {
        let (console, buffer) = Console::capture();
        let sink = FileSink::new(console);

        sink.echo("hello\n");
        sink.echo("world\n");

        assert_eq!(buffer.lock().as_str(), "hello\nworld\n");
    }
}
