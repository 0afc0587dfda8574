//! Main logger implementation
//!
//! The [`Logger`] owns the record queue, the level threshold and the single
//! consumer thread that formats records and writes them to the file and
//! console sinks. Its lifecycle is:
//!
//! ```text
//! Uninitialized --start--> Running --stop--> Stopped
//!                           |   ^
//!                 drain_sync|   |bounded wait over
//!                           v   |
//!                          Draining
//! ```
//!
//! `Stopped` is terminal; a fresh `Logger` is needed to log again.

use super::{
    config::{LoggerConfig, TimestampSource},
    error::{LoggerError, Result},
    formatter::format_record,
    log_level::LogLevel,
    log_record::LogRecord,
    metrics::LoggerMetrics,
    queue::RecordQueue,
    sink::Sink,
    thread_ids::ThreadIds,
};
use crate::sinks::{ConsoleSink, FileSink};
use chrono::Local;
use parking_lot::{Mutex, RwLock};
use std::any::Any;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Name given to the background consumer thread
pub const CONSUMER_THREAD_NAME: &str = "log-consumer";

/// Observable lifecycle state of a [`Logger`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggerState {
    Uninitialized,
    Running,
    /// Running, with at least one caller blocked in a bounded drain
    Draining,
    Stopped,
}

enum Lifecycle {
    Uninitialized,
    Running(thread::JoinHandle<()>),
    Stopped,
}

pub struct Logger {
    lifecycle: RwLock<Lifecycle>,
    min_level: RwLock<LogLevel>,
    queue: Arc<RecordQueue>,
    metrics: Arc<LoggerMetrics>,
    /// Handed to the consumer thread on `start`
    console: Mutex<Option<ConsoleSink>>,
    drain_timeout: Duration,
    timestamp_source: TimestampSource,
    has_file_sink: AtomicBool,
    draining: AtomicUsize,
}

impl Logger {
    /// Unstarted logger with the default configuration
    #[must_use]
    pub fn new() -> Self {
        LoggerBuilder::new().build()
    }

    /// Open the file sink, spawn the consumer thread and begin accepting records.
    ///
    /// A file that cannot be opened is not an error: the logger carries on
    /// with the console only, which [`has_file_sink`](Self::has_file_sink) reports.
    pub fn start(&self, min_level: LogLevel, file_path: Option<&Path>) -> Result<()> {
        let mut lifecycle = self.lifecycle.write();
        if !matches!(*lifecycle, Lifecycle::Uninitialized) {
            return Err(LoggerError::AlreadyStarted);
        }

        *self.min_level.write() = min_level;

        let file = file_path.and_then(|path| FileSink::open(path).ok());
        self.has_file_sink.store(file.is_some(), Ordering::Release);

        let console = self.console.lock().take();
        let queue = Arc::clone(&self.queue);
        let metrics = Arc::clone(&self.metrics);

        let handle = thread::Builder::new()
            .name(CONSUMER_THREAD_NAME.to_string())
            .spawn(move || run_consumer(&queue, file, console, &metrics))
            .map_err(|e| {
                LoggerError::io_operation("spawning consumer thread", "thread spawn failed", e)
            })?;

        *lifecycle = Lifecycle::Running(handle);
        Ok(())
    }

    /// Queue a record for the consumer.
    ///
    /// Fails with [`LoggerError::Uninitialized`] outside the running state.
    /// Records below the threshold are discarded and still return `Ok`.
    pub fn submit(&self, record: LogRecord) -> Result<()> {
        // Held across the push so `stop` cannot slip in between check and enqueue
        let lifecycle = self.lifecycle.read();
        if !matches!(*lifecycle, Lifecycle::Running(_)) {
            return Err(LoggerError::Uninitialized);
        }

        if record.level() < *self.min_level.read() {
            self.metrics.record_filtered();
            return Ok(());
        }

        let record = match (self.timestamp_source, record.captured_at()) {
            (TimestampSource::Producer, None) => record.with_timestamp(Local::now()),
            _ => record,
        };

        self.metrics.record_submitted();
        self.queue.push(record);
        Ok(())
    }

    pub fn log(
        &self,
        level: LogLevel,
        message: impl Into<String>,
        file: &str,
        function: &str,
        line: u32,
    ) -> Result<()> {
        self.submit(LogRecord::new(level, message, file, function, line))
    }

    /// Best-effort wait, bounded by the configured drain timeout, for every
    /// queued record to be written. Returns whether that happened in time.
    pub fn drain_sync(&self) -> bool {
        self.drain_for(self.drain_timeout)
    }

    /// Like [`drain_sync`](Self::drain_sync) with an explicit bound
    pub fn drain_for(&self, timeout: Duration) -> bool {
        self.draining.fetch_add(1, Ordering::AcqRel);
        let idle = self.queue.wait_idle(timeout);
        self.draining.fetch_sub(1, Ordering::AcqRel);
        idle
    }

    /// Stop accepting records, let the consumer drain the queue, and join it.
    ///
    /// Calling this on a logger that is not running is an ordering bug and
    /// fails with [`LoggerError::Uninitialized`].
    pub fn stop(&self) -> Result<()> {
        let handle = {
            let mut lifecycle = self.lifecycle.write();
            match std::mem::replace(&mut *lifecycle, Lifecycle::Stopped) {
                Lifecycle::Running(handle) => handle,
                previous => {
                    *lifecycle = previous;
                    return Err(LoggerError::Uninitialized);
                }
            }
        };

        self.queue.request_stop();
        handle
            .join()
            .map_err(|panic| LoggerError::ConsumerPanicked(panic_message(panic.as_ref())))
    }

    pub fn state(&self) -> LoggerState {
        match *self.lifecycle.read() {
            Lifecycle::Uninitialized => LoggerState::Uninitialized,
            Lifecycle::Running(_) if self.draining.load(Ordering::Acquire) > 0 => {
                LoggerState::Draining
            }
            Lifecycle::Running(_) => LoggerState::Running,
            Lifecycle::Stopped => LoggerState::Stopped,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state(), LoggerState::Running | LoggerState::Draining)
    }

    pub fn min_level(&self) -> LogLevel {
        *self.min_level.read()
    }

    pub fn set_min_level(&self, level: LogLevel) {
        *self.min_level.write() = level;
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level()
    }

    /// Whether the log file was opened by `start`
    pub fn has_file_sink(&self) -> bool {
        self.has_file_sink.load(Ordering::Acquire)
    }

    /// Records queued and not yet picked up by the consumer
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    pub fn drain_timeout(&self) -> Duration {
        self.drain_timeout
    }

    pub fn timestamp_source(&self) -> TimestampSource {
        self.timestamp_source
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use async_dual_logger::Logger;
    ///
    /// let logger = Logger::builder().console(false).build();
    /// logger.start(async_dual_logger::LogLevel::Info, None).unwrap();
    /// logger.log(async_dual_logger::LogLevel::Debug, "hidden", file!(), "main", line!()).unwrap();
    /// logger.stop().unwrap();
    ///
    /// assert_eq!(logger.metrics().filtered(), 1);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if matches!(*self.lifecycle.read(), Lifecycle::Running(_)) {
            if let Err(e) = self.stop() {
                eprintln!("[LOGGER ERROR] Failed to stop logger on drop: {}", e);
            }
        }
    }
}

/// Consumer thread body: drain batches until a stop is requested and the
/// queue is empty.
fn run_consumer(
    queue: &RecordQueue,
    mut file: Option<FileSink>,
    mut console: Option<ConsoleSink>,
    metrics: &LoggerMetrics,
) {
    let ids = ThreadIds::current();

    while let Some(batch) = queue.take_batch() {
        for record in batch {
            let at = record.captured_at().unwrap_or_else(Local::now);
            let line = format_record(&record, &at, ids);

            let mut delivered = false;
            if let Some(sink) = file.as_mut() {
                if deliver(sink, record.level(), &line) {
                    delivered = true;
                } else {
                    metrics.record_file_error();
                }
            }
            if let Some(sink) = console.as_mut() {
                if deliver(sink, record.level(), &line) {
                    delivered = true;
                } else {
                    metrics.record_console_error();
                }
            }

            if delivered {
                metrics.record_written();
            } else {
                metrics.record_undelivered();
            }
        }
        queue.finish_batch();
    }
}

/// Write and flush one line with panic isolation, so a failing sink never
/// takes the other one (or the consumer thread) down with it.
fn deliver(sink: &mut dyn Sink, level: LogLevel, line: &str) -> bool {
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        sink.write_line(level, line)?;
        sink.flush()
    }));

    match result {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            eprintln!("[LOGGER ERROR] {} sink failed: {}", sink.name(), e);
            false
        }
        Err(panic_info) => {
            eprintln!(
                "[LOGGER CRITICAL] {} sink panicked: {}. Other sinks continue to function.",
                sink.name(),
                panic_message(panic_info.as_ref())
            );
            false
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing an unstarted [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use async_dual_logger::prelude::*;
/// use std::time::Duration;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Debug)
///     .use_colors(false)
///     .drain_timeout(Duration::from_millis(50))
///     .start()
///     .unwrap();
///
/// logger.stop().unwrap();
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    /// Exact bound set through [`drain_timeout`](Self::drain_timeout); the
    /// config keeps it rounded up to whole milliseconds
    drain_timeout: Option<Duration>,
    console_writer: Option<Box<dyn Write + Send>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::from_config(LoggerConfig::default())
    }

    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            drain_timeout: None,
            console_writer: None,
        }
    }

    /// Set the level threshold used by [`start`](Self::start)
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.config.min_level = level;
        self
    }

    /// Set the log file used by [`start`](Self::start)
    #[must_use = "builder methods return a new value"]
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.file_path = Some(path.into());
        self
    }

    /// Enable or disable the console sink
    #[must_use = "builder methods return a new value"]
    pub fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Send console output to `writer` instead of standard output
    #[must_use = "builder methods return a new value"]
    pub fn console_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.console_writer = Some(Box::new(writer));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.config.use_colors = Some(use_colors);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn drain_timeout(mut self, timeout: Duration) -> Self {
        let millis = timeout.as_nanos().div_ceil(1_000_000);
        self.config.drain_timeout_ms = u64::try_from(millis).unwrap_or(u64::MAX);
        self.drain_timeout = Some(timeout);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn timestamp_source(mut self, source: TimestampSource) -> Self {
        self.config.timestamp_source = source;
        self
    }

    /// Build an unstarted Logger; call [`Logger::start`] to run it
    pub fn build(self) -> Logger {
        let console = if self.config.console {
            let sink = match self.console_writer {
                Some(writer) => ConsoleSink::with_writer(writer),
                None => ConsoleSink::new(),
            };
            Some(match self.config.use_colors {
                Some(use_colors) => sink.with_colors(use_colors),
                None => sink,
            })
        } else {
            None
        };

        Logger {
            lifecycle: RwLock::new(Lifecycle::Uninitialized),
            min_level: RwLock::new(self.config.min_level),
            queue: Arc::new(RecordQueue::new()),
            metrics: Arc::new(LoggerMetrics::new()),
            console: Mutex::new(console),
            drain_timeout: self.drain_timeout.unwrap_or_else(|| self.config.drain_timeout()),
            timestamp_source: self.config.timestamp_source,
            has_file_sink: AtomicBool::new(false),
            draining: AtomicUsize::new(0),
        }
    }

    /// Validate the configuration, build the Logger and start it
    pub fn start(self) -> Result<Logger> {
        self.config.validate()?;
        let min_level = self.config.min_level;
        let file_path = self.config.file_path.clone();

        let logger = self.build();
        logger.start(min_level, file_path.as_deref())?;
        Ok(logger)
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
