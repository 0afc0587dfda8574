//! File logging example
//!
//! Demonstrates the lifecycle guard writing to both the log file and the console.
//!
//! Run with: cargo run --example file_logging

use async_dual_logger::prelude::*;
use async_dual_logger::{info, warn};

fn main() -> Result<()> {
    println!("=== Async Dual Logger - File Logging Example ===\n");

    let guard = LoggerGuard::init(LoggerConfig {
        min_level: LogLevel::Info,
        file_path: Some("application.log".into()),
        ..LoggerConfig::default()
    })?;
    let log = guard.handle();

    info!(log, "Application started")?;
    info!(log, "Configuration loaded successfully")?;
    warn!(log, "Using default settings for some options")?;

    for i in 1..=5 {
        info!(log, "Processing item {}/5", i)?;
        if i == 3 {
            warn!(log, "Item 3 took longer than expected")?;
        }
    }

    info!(log, "All operations completed")?;

    // Stops the consumer after every queued line is written
    guard.shutdown()?;

    println!("\n=== Example completed successfully! ===");
    println!("Check 'application.log' for the full log output");

    Ok(())
}
