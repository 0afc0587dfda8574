//! Log record structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};

/// One captured log event.
///
/// A record is immutable once built. It is moved into the queue on submit and
/// moved out again by the consumer thread, so it never has more than one owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    level: LogLevel,
    message: String,
    file: String,
    function: String,
    line: u32,
    captured_at: Option<DateTime<Local>>,
}

impl LogRecord {
    /// Sanitize log message to prevent log injection attacks
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a record always occupies exactly one line in the sinks.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        level: LogLevel,
        message: impl Into<String>,
        file: impl Into<String>,
        function: impl Into<String>,
        line: u32,
    ) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message.into()),
            file: file.into(),
            function: function.into(),
            line,
            captured_at: None,
        }
    }

    /// Pin the record's timestamp instead of letting the consumer stamp it
    #[must_use]
    pub fn with_timestamp(mut self, at: DateTime<Local>) -> Self {
        self.captured_at = Some(at);
        self
    }

    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn file(&self) -> &str {
        &self.file
    }

    #[inline]
    pub fn function(&self) -> &str {
        &self.function
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn captured_at(&self) -> Option<DateTime<Local>> {
        self.captured_at
    }
}
