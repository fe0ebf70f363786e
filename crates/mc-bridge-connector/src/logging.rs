//! `tracing` subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingSection;

/// Filter from a configured level string such as `"info"` or
/// `"mc_bridge_connector=debug,info"`.
pub fn level_filter(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(level))
}

/// Install the global fmt subscriber. Fails if one is already installed.
pub fn init(config: &LoggingSection) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(&config.level))
        .with_target(true)
        .try_init()
}
