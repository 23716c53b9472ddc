//! Demonstrates the logging configuration surface.
//!
//! Run with: `cargo run --example logging_demo --package core-runtime`

use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use tracing::Level;

fn main() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Pretty)
        .with_level(Level::DEBUG)
        .with_thread_info(true);

    init_logging(config).expect("failed to initialize logging");

    tracing::info!(demo = true, "logging initialized");
    tracing::debug!(locator = "https://example.com/a.mp3", "loading asset");
    tracing::warn!("engine reported a non-finite position, coercing to 0");
    tracing::error!("asset property loading failed: timed out");
}
