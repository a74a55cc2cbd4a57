//! Tracing setup for the binary
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! caller's choice. Logs go to stderr so command output stays clean.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable checked before `RUST_LOG`
pub const LOG_ENV: &str = "RUNWAY_LOG";

static TRACING_INIT: Once = Once::new();

/// Build the filter from `RUNWAY_LOG`, then `RUST_LOG`, then `default_filter`
pub fn build_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber once; later calls are no-ops
pub fn init_tracing(default_filter: &str) {
    TRACING_INIT.call_once(|| {
        let result = fmt()
            .with_env_filter(build_filter(default_filter))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();

        if result.is_ok() {
            tracing::debug!("tracing initialized");
        }
    });
}
