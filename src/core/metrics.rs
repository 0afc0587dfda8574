//! Logger metrics for observability
//!
//! Counters describing what happened to submitted records. The queue is
//! unbounded, so nothing is ever dropped for lack of space; records only
//! disappear through level filtering or when no sink accepts them.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use async_dual_logger::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
/// metrics.record_submitted();
/// metrics.record_written();
///
/// assert_eq!(metrics.submitted(), 1);
/// assert_eq!(metrics.written(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Records accepted into the queue
    submitted: AtomicU64,

    /// Records discarded for being below the level threshold
    filtered: AtomicU64,

    /// Records accepted by at least one sink
    written: AtomicU64,

    /// Records the consumer processed that no sink accepted
    undelivered: AtomicU64,

    file_write_errors: AtomicU64,
    console_write_errors: AtomicU64,
}

impl LoggerMetrics {
    /// Create a new metrics instance with all counters at zero
    pub const fn new() -> Self {
        Self {
            submitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            written: AtomicU64::new(0),
            undelivered: AtomicU64::new(0),
            file_write_errors: AtomicU64::new(0),
            console_write_errors: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn submitted(&self) -> u64 {
        self.submitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn undelivered(&self) -> u64 {
        self.undelivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn file_write_errors(&self) -> u64 {
        self.file_write_errors.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn console_write_errors(&self) -> u64 {
        self.console_write_errors.load(Ordering::Relaxed)
    }

    /// Records submitted but not yet processed by the consumer
    pub fn pending(&self) -> u64 {
        self.submitted()
            .saturating_sub(self.written())
            .saturating_sub(self.undelivered())
    }

    #[inline]
    pub fn record_submitted(&self) -> u64 {
        self.submitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_undelivered(&self) -> u64 {
        self.undelivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_file_error(&self) -> u64 {
        self.file_write_errors.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_console_error(&self) -> u64 {
        self.console_write_errors.fetch_add(1, Ordering::Relaxed)
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.submitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
        self.undelivered.store(0, Ordering::Relaxed);
        self.file_write_errors.store(0, Ordering::Relaxed);
        self.console_write_errors.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            submitted: AtomicU64::new(self.submitted()),
            filtered: AtomicU64::new(self.filtered()),
            written: AtomicU64::new(self.written()),
            undelivered: AtomicU64::new(self.undelivered()),
            file_write_errors: AtomicU64::new(self.file_write_errors()),
            console_write_errors: AtomicU64::new(self.console_write_errors()),
        }
    }
}
