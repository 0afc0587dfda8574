//! Process lifecycle guard
//!
//! [`LoggerGuard`] is the handle an application creates once at startup. It
//! starts the logger, hands out [`LogHandle`]s to call sites, and stops the
//! logger (draining every queued record) when it is shut down or dropped.
//!
//! ```no_run
//! use async_dual_logger::{info, LoggerConfig, LoggerGuard, LogLevel};
//!
//! fn main() -> async_dual_logger::Result<()> {
//!     let guard = LoggerGuard::init(LoggerConfig {
//!         min_level: LogLevel::Info,
//!         file_path: Some("app.log".into()),
//!         ..LoggerConfig::default()
//!     })?;
//!
//!     let log = guard.handle();
//!     info!(log, "service started on port {}", 8080)?;
//!
//!     guard.shutdown()
//! }
//! ```

use super::config::LoggerConfig;
use super::error::{LoggerError, Result};
use super::logger::{Logger, LoggerBuilder};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Shared reference to the running logger, cheap to clone into call sites
pub type LogHandle = Arc<Logger>;

const UNCLAIMED: u8 = 0;
const ACTIVE: u8 = 1;
const SHUT_DOWN: u8 = 2;

/// One-shot claim on the process logger. Only a failed start returns it to
/// `UNCLAIMED`; once a guard has shut down, no other guard can be created.
static GUARD_STATE: AtomicU8 = AtomicU8::new(UNCLAIMED);

#[must_use = "dropping the guard shuts the logger down"]
pub struct LoggerGuard {
    logger: LogHandle,
    released: bool,
}

impl LoggerGuard {
    /// Start the process logger from a configuration.
    ///
    /// Fails with [`LoggerError::AlreadyInitialized`] if a guard has already
    /// been started in this process, whether or not it is still alive.
    pub fn init(config: LoggerConfig) -> Result<Self> {
        Self::init_with(LoggerBuilder::from_config(config))
    }

    /// Start the process logger from a prepared builder
    pub fn init_with(builder: LoggerBuilder) -> Result<Self> {
        if GUARD_STATE
            .compare_exchange(UNCLAIMED, ACTIVE, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(LoggerError::AlreadyInitialized);
        }

        match builder.start() {
            Ok(logger) => Ok(Self {
                logger: Arc::new(logger),
                released: false,
            }),
            Err(e) => {
                GUARD_STATE.store(UNCLAIMED, Ordering::Release);
                Err(e)
            }
        }
    }

    /// Whether a guard currently owns the process logger
    pub fn is_active() -> bool {
        GUARD_STATE.load(Ordering::Acquire) == ACTIVE
    }

    /// Whether a guard has been started and shut down in this process
    pub fn is_shut_down() -> bool {
        GUARD_STATE.load(Ordering::Acquire) == SHUT_DOWN
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    pub fn handle(&self) -> LogHandle {
        Arc::clone(&self.logger)
    }

    /// Best-effort bounded wait for queued records to be written
    pub fn wait_for_drain(&self) -> bool {
        self.logger.drain_sync()
    }

    /// Stop the logger and wait for the consumer thread to exit
    pub fn shutdown(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if self.released {
            return Ok(());
        }
        self.released = true;
        let result = self.logger.stop();
        GUARD_STATE.store(SHUT_DOWN, Ordering::Release);
        result
    }
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        match self.release() {
            // Someone already stopped it through a handle
            Ok(()) | Err(LoggerError::Uninitialized) => {}
            Err(e) => eprintln!("[LOGGER ERROR] Logger shutdown failed: {}", e),
        }
    }
}
