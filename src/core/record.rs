//! Log Records
//!
//! A record lives only for the duration of one logging call.

use chrono::{Local, NaiveDateTime, Timelike};

use super::level::LogLevel;

/// Wall-clock time at second resolution, in local time.
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// One log record, borrowed from the caller's stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LogRecord<'a> {
    /// Category (stream name, also the file suffix)
    pub category: &'a str,
    /// Severity
    pub level: LogLevel,
    /// Local wall-clock time
    pub timestamp: NaiveDateTime,
    /// Global sequence number
    pub sequence: u64,
    /// Rendered message body
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    /// Create a record.
    pub fn new(
        category: &'a str,
        level: LogLevel,
        timestamp: NaiveDateTime,
        sequence: u64,
        message: &'a str,
    ) -> Self {
        Self {
            category,
            level,
            timestamp,
            sequence,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_has_second_resolution() {
        let now = now_local();
        assert_eq!(now.nanosecond(), 0);
    }
}
