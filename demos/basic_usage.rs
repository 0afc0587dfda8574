//! Basic logger usage example
//!
//! Demonstrates console logging at every level and runtime threshold changes.
//!
//! Run with: cargo run --example basic_usage

use async_dual_logger::prelude::*;
use async_dual_logger::{debug, error, info, warn};

fn main() -> Result<()> {
    println!("=== Async Dual Logger - Basic Usage Example ===\n");

    let logger = Logger::builder().min_level(LogLevel::Debug).start()?;

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message")?;
    info!(logger, "This is an info message")?;
    warn!(logger, "This is a warning message")?;
    error!(logger, "This is an error message")?;
    logger.drain_sync();

    println!("\n2. Raising the threshold to WARN - debug and info won't show:");
    logger.set_min_level(LogLevel::Warn);
    debug!(logger, "Debug message (hidden)")?;
    info!(logger, "Info message (hidden)")?;
    warn!(logger, "Warning message (visible)")?;

    logger.stop()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
