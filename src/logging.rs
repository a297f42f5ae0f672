//! Opt-in log output for hosts that have no subscriber of their own.
//!
//! The overlay only emits `tracing` events: `debug` when an instance mounts
//! or unmounts, `warn` when a loaded configuration renders degenerately.

use std::error::Error;

use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "shimmer=debug";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs a global `fmt` subscriber writing to stderr.
///
/// Fails if the process already has a global subscriber.
pub fn init_tracing() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_timer(UtcTime::rfc_3339())
        .try_init()
}
