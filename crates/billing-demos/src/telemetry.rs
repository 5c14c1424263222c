//! # Telemetry
//!
//! Installs the global `tracing` subscriber for a demo process.
//!
//! ## Log Levels
//! - `RUST_LOG=debug` - show bill totals, VAT lookups and passed checks
//! - `RUST_LOG=billing_core=trace` - everything from the pattern code only
//! - Otherwise: `[log] filter` from the config (default `info`), which shows
//!   the decorator log lines and nothing else

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;
use crate::error::{DemoError, DemoResult};

/// Parses `EnvFilter` directives.
pub fn build_filter(directives: &str) -> DemoResult<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| DemoError::Telemetry(e.to_string()))
}

/// Initializes the tracing subscriber. `RUST_LOG` overrides the settings.
///
/// Fails if a global subscriber is already installed.
pub fn init(settings: &LogSettings) -> DemoResult<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => build_filter(&settings.filter)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(settings.with_target)
        .with_ansi(settings.ansi)
        .try_init()
        .map_err(|e| DemoError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter() {
        assert!(build_filter("info").is_ok());
        assert!(build_filter("warn,billing_core=debug").is_ok());
    }
}
