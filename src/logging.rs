//! Tracing subscriber setup for the binary.
//!
//! The library only emits events; installing a subscriber is left to the
//! binary so embedders keep control of their own output.

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Parse a level name, falling back to `info`.
pub fn parse_level(level: &str) -> LevelFilter {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Install a stderr subscriber.
///
/// `RUST_LOG` directives take precedence over `level`. Stdout is left free
/// for command output. Calling this twice is a no-op.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::builder()
        .with_default_directive(parse_level(level).into())
        .parse_lossy(std::env::var("RUST_LOG").unwrap_or_default());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(filter);

    if tracing_subscriber::registry().with(stderr_layer).try_init().is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
