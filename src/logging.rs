//! Logging bootstrap for the `minutes` binary
//!
//! Events go to stderr so stdout carries only Markdown or TOML. `RUST_LOG`
//! takes precedence over the configured level.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber
///
/// # Errors
/// Returns an error when `level` is not a valid filter directive or a
/// subscriber is already installed.
pub fn init_logging(level: &str) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .map_err(|err| anyhow!("Invalid log level '{}': {}", level, err))?,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init()
        .map_err(|err| anyhow!("Failed to initialize logging: {}", err))
}
