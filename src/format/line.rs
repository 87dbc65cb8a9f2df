//! Line Formatting
//!
//! Renders messages into a bounded buffer and builds the canonical line:
//!
//! ```text
//! [System] [2024-12-01 09:30:05 / ERROR / 000000002] Hello, Player1! Your score is 100.
//! ```

use std::fmt::{self, Write};

use chrono::NaiveDateTime;

use crate::core::level::LogLevel;
use crate::core::record::LogRecord;

/// Maximum characters in a rendered message.
///
/// Matches a 512-slot buffer with one slot reserved for the terminator.
pub const MAX_MESSAGE_CHARS: usize = 511;

/// Timestamp layout used in every line header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Minimum width of the zero-padded sequence column.
pub const SEQUENCE_WIDTH: usize = 9;

/// Message rendering failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// Rendered text would exceed the message bound.
    #[error("message exceeds {limit} characters")]
    Overflow {
        /// Character limit that was hit
        limit: usize,
    },

    /// A `Display` implementation inside the arguments returned an error.
    #[error("formatting trait returned an error")]
    Failed,
}

/// `fmt::Write` target that refuses to grow past a character limit.
#[derive(Debug)]
pub struct BoundedBuffer {
    text: String,
    chars: usize,
    limit: usize,
    overflowed: bool,
}

impl BoundedBuffer {
    /// Create an empty buffer holding at most `limit` characters.
    pub fn new(limit: usize) -> Self {
        Self {
            text: String::new(),
            chars: 0,
            limit,
            overflowed: false,
        }
    }

    /// Whether a write was refused.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    /// Take the rendered text.
    pub fn into_string(self) -> String {
        self.text
    }
}

impl Write for BoundedBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        // Once refused, every later write is refused
        if self.overflowed {
            return Err(fmt::Error);
        }
        let incoming = s.chars().count();
        if self.chars + incoming > self.limit {
            self.overflowed = true;
            return Err(fmt::Error);
        }
        self.text.push_str(s);
        self.chars += incoming;
        Ok(())
    }
}

/// Render format arguments, all or nothing.
pub fn render_message(args: fmt::Arguments<'_>) -> Result<String, FormatError> {
    render_message_bounded(args, MAX_MESSAGE_CHARS)
}

/// Render format arguments with an explicit character limit.
pub fn render_message_bounded(args: fmt::Arguments<'_>, limit: usize) -> Result<String, FormatError> {
    // Fast path for literal messages without arguments
    if let Some(literal) = args.as_str() {
        if literal.chars().count() > limit {
            return Err(FormatError::Overflow { limit });
        }
        return Ok(literal.to_string());
    }

    let mut buffer = BoundedBuffer::new(limit);
    let result = buffer.write_fmt(args);

    // A Display impl may swallow the refused write and still return Ok
    if buffer.overflowed() {
        return Err(FormatError::Overflow { limit });
    }
    match result {
        Ok(()) => Ok(buffer.into_string()),
        Err(_) => Err(FormatError::Failed),
    }
}

/// Build the canonical line for a record, newline included.
pub fn format_line(record: &LogRecord<'_>) -> String {
    format!(
        "[{}] [{} / {} / {:0width$}] {}\n",
        record.category,
        record.timestamp.format(TIMESTAMP_FORMAT),
        record.level,
        record.sequence,
        record.message,
        width = SEQUENCE_WIDTH,
    )
}

/// Build the header line that precedes a hex dump.
///
/// Hex records carry no sequence number.
pub fn format_hex_header(
    category: &str,
    level: LogLevel,
    timestamp: NaiveDateTime,
    description: &str,
) -> String {
    format!(
        "[{}] [{} / {} ] {}\n",
        category,
        timestamp.format(TIMESTAMP_FORMAT),
        level,
        description,
    )
}
