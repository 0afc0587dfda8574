//! Concurrent logging example
//!
//! Several producer threads share one logger handle; the single consumer
//! thread writes their records in arrival order.
//!
//! Run with: cargo run --example concurrent_logging

use async_dual_logger::info;
use async_dual_logger::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Async Dual Logger - Concurrent Logging Example ===\n");

    let guard = LoggerGuard::init_with(
        Logger::builder()
            .min_level(LogLevel::Debug)
            .file("concurrent_test.log")
            .timestamp_source(TimestampSource::Producer),
    )?;

    let mut handles = vec![];
    for thread_id in 0..5 {
        let log = guard.handle();
        handles.push(thread::spawn(move || -> Result<()> {
            for i in 0..20 {
                info!(log, "Thread {} - Message {}", thread_id, i)?;
                thread::sleep(Duration::from_millis(10));
            }
            Ok(())
        }));
    }

    for handle in handles {
        if let Ok(Err(e)) = handle.join() {
            eprintln!("producer failed: {}", e);
        }
    }

    if !guard.wait_for_drain() {
        println!("   (consumer still busy after the drain bound)");
    }
    println!(
        "\n   5 threads logged 20 messages each, {} written",
        guard.logger().metrics().written()
    );

    guard.shutdown()?;
    println!("\n=== Example completed successfully! ===");
    println!("Check 'concurrent_test.log' for file output");

    Ok(())
}
