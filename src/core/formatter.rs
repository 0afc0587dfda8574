//! Line formatting
//!
//! Turns a [`LogRecord`] into the text written to both sinks:
//!
//! ```text
//! [2024-06-22 10:00:00.500] [WARN] [1200/1234]: disk low (c.cpp poll:42)
//! ```
//!
//! Formatting is pure: the capture time and the thread identifiers are
//! passed in, so the same inputs always produce the same line.

use super::log_record::LogRecord;
use super::thread_ids::ThreadIds;
use chrono::{DateTime, TimeZone};
use std::fmt::{Display, Write};

/// Timestamp layout with millisecond precision
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Final path segment of `path`, splitting on both `/` and `\`
pub fn basename(path: &str) -> &str {
    path.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or(path)
}

/// Format one record without a trailing newline
#[must_use]
pub fn format_record<Tz>(record: &LogRecord, at: &DateTime<Tz>, ids: ThreadIds) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut line = String::with_capacity(64 + record.message().len());
    // Writing into a String cannot fail
    let _ = write!(
        line,
        "[{}] [{}] [{}]: {} ({} {}:{})",
        at.format(TIMESTAMP_FORMAT),
        record.level(),
        ids,
        record.message(),
        basename(record.file()),
        record.function(),
        record.line()
    );
    line
}
