//! Tracing setup for the lightbnb CLI
//!
//! Usage:
//!   lightbnb --debug ...               # Debug logging to stderr
//!   RUST_LOG=lightbnb_db=debug lightbnb  # Fine-grained log control
//!
//! Precedence: `RUST_LOG`, then `--debug`, then `log_level` from the
//! config file, then `info`. Logs go to stderr so stdout stays valid JSON.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Enable debug logging (unless RUST_LOG is explicitly set)
    pub debug: bool,
    /// Fallback filter from config
    pub log_level: Option<String>,
}

impl TracingConfig {
    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let directive = if self.debug {
                "debug"
            } else {
                self.log_level.as_deref().unwrap_or("info")
            };
            EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
        })
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.filter())
        .with_target(config.debug) // Show targets in debug mode
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
