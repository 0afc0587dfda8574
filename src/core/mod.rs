//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod guard;
pub mod log_level;
pub mod log_record;
pub mod logger;
pub mod metrics;
pub mod queue;
pub mod sink;
pub mod thread_ids;

pub use config::{LoggerConfig, TimestampSource, DEFAULT_DRAIN_TIMEOUT};
pub use error::{LoggerError, Result};
pub use formatter::{basename, format_record};
pub use guard::{LogHandle, LoggerGuard};
pub use log_level::{level_label, LogLevel};
pub use log_record::LogRecord;
pub use logger::{Logger, LoggerBuilder, LoggerState};
pub use metrics::LoggerMetrics;
pub use queue::RecordQueue;
pub use sink::Sink;
pub use thread_ids::ThreadIds;
