//! Tracing setup for the folio binary
//!
//! Usage:
//!   folio --debug serve               # Debug logging to console
//!   RUST_LOG=folio_server=debug folio # Fine-grained log control
//!
//! Without `RUST_LOG`, the level comes from `[logging] level` in the config
//! file (default: info).

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Tracing configuration options
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// Enable debug logging (overrides the configured level, not RUST_LOG)
    pub debug: bool,
    /// Filter directive used when RUST_LOG is unset
    pub default_level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            debug: false,
            default_level: "info".to_string(),
        }
    }
}

impl TracingConfig {
    fn fallback_directive(&self) -> &str {
        if self.debug {
            "debug"
        } else {
            &self.default_level
        }
    }
}

/// Initialize console tracing
pub fn init(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.fallback_directive()))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_flag_wins_over_level() {
        let config = TracingConfig {
            debug: true,
            default_level: "warn".into(),
        };
        assert_eq!(config.fallback_directive(), "debug");

        let config = TracingConfig {
            debug: false,
            default_level: "warn".into(),
        };
        assert_eq!(config.fallback_directive(), "warn");
    }
}
