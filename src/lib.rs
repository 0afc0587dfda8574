//! # Async Dual Logger
//!
//! An embeddable logger that records leveled, timestamped lines to one
//! append-only file and a color-coded console without blocking the caller
//! beyond enqueueing the record.
//!
//! ## Features
//!
//! - **Non-blocking producers**: records go into an unbounded queue drained by a
//!   single background consumer thread
//! - **Two sinks**: an append-mode log file and a colored standard output copy
//! - **Explicit lifecycle**: `start` / `drain_sync` / `stop`, tied to a scoped
//!   [`LoggerGuard`] that shuts down on drop
//! - **Call-site macros**: `info!(log, "...")` records file, function and line
//!
//! Each line looks like:
//!
//! ```text
//! [2024-06-22 10:00:00.500] [WARN] [1200/1234]: disk low (c.cpp poll:42)
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        LogHandle, LogLevel, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerGuard, LoggerMetrics, LoggerState, Result, TimestampSource,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::core::{
    basename, format_record, level_label, LogHandle, LogLevel, LogRecord, Logger, LoggerBuilder,
    LoggerConfig, LoggerError, LoggerGuard, LoggerMetrics, LoggerState, RecordQueue, Result, Sink,
    ThreadIds, TimestampSource, DEFAULT_DRAIN_TIMEOUT,
};
pub use sinks::{ConsoleSink, FileSink};
