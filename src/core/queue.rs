//! Record queue shared between producers and the consumer thread
//!
//! An unbounded FIFO behind a single mutex. Producers append and signal;
//! the consumer takes everything queued in one lock acquisition and formats
//! it after the lock is released, so slow sink I/O never holds up a producer.

use super::log_record::LogRecord;
use parking_lot::{Condvar, Mutex};
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Debug, Default)]
struct QueueState {
    records: VecDeque<LogRecord>,
    stop_requested: bool,
    /// Records taken by the consumer and not yet written
    in_flight: usize,
}

impl QueueState {
    fn is_idle(&self) -> bool {
        self.records.is_empty() && self.in_flight == 0
    }
}

#[derive(Debug, Default)]
pub struct RecordQueue {
    state: Mutex<QueueState>,
    /// Signalled when a record is queued or a stop is requested
    available: Condvar,
    /// Signalled when the consumer finishes a batch and nothing is queued
    idle: Condvar,
}

impl RecordQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and wake the consumer
    pub fn push(&self, record: LogRecord) {
        let mut state = self.state.lock();
        state.records.push_back(record);
        self.available.notify_one();
    }

    /// Block until records are queued or a stop is requested, then take all of them.
    ///
    /// Returns `None` once a stop has been requested and the queue is empty.
    pub fn take_batch(&self) -> Option<VecDeque<LogRecord>> {
        let mut state = self.state.lock();
        self.available.wait_while(&mut state, |s| s.records.is_empty() && !s.stop_requested);

        if state.records.is_empty() {
            return None;
        }

        let batch = std::mem::take(&mut state.records);
        state.in_flight = batch.len();
        Some(batch)
    }

    /// Mark the batch returned by the last `take_batch` as written
    pub fn finish_batch(&self) {
        let mut state = self.state.lock();
        state.in_flight = 0;
        if state.records.is_empty() {
            self.idle.notify_all();
        }
    }

    /// Ask the consumer to exit once the queue is drained
    pub fn request_stop(&self) {
        let mut state = self.state.lock();
        state.stop_requested = true;
        self.available.notify_all();
    }

    pub fn is_stop_requested(&self) -> bool {
        self.state.lock().stop_requested
    }

    /// Point-in-time emptiness; stale as soon as the lock is released
    pub fn is_empty(&self) -> bool {
        self.state.lock().records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.state.lock().records.len()
    }

    /// Wait at most `timeout` for the queue to empty and the consumer to go idle.
    ///
    /// Returns whether that happened within the bound.
    pub fn wait_idle(&self, timeout: Duration) -> bool {
        let mut state = self.state.lock();
        if state.is_idle() {
            return true;
        }
        self.idle.wait_while_for(&mut state, |s| !s.is_idle(), timeout);
        state.is_idle()
    }
}
