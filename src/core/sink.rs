//! Sink trait for log output destinations

use super::{error::Result, log_level::LogLevel};

/// A destination for formatted log lines.
///
/// Sinks are moved into the consumer thread and only ever touched from there.
pub trait Sink: Send {
    /// Write one already formatted line, without its trailing newline
    fn write_line(&mut self, level: LogLevel, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
