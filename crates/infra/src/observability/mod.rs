//! Observability infrastructure for logging and tracing
//!
//! The core crates only emit `tracing` events; this module installs the
//! subscriber that renders them. `RUST_LOG` overrides the configured level.

use slotwise_domain::{LoggingConfig, Result, SchedulingError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Build the filter: `RUST_LOG` when set and valid, else `config.level`.
///
/// # Errors
/// Returns `SchedulingError::Config` if `config.level` is not a valid
/// filter directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| SchedulingError::Config(format!("Invalid log level '{}': {e}", config.level)))
}

/// Install the global tracing subscriber.
///
/// Returns `false` without touching anything if a subscriber is already
/// installed, so repeated calls (tests, embedding hosts) are harmless.
///
/// # Errors
/// Returns `SchedulingError::Config` for an invalid log level.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = env_filter(config)?;
    let registry = Registry::default().with(filter);

    let installed = if config.json {
        registry.with(fmt::layer().json().with_current_span(false)).try_init().is_ok()
    } else {
        registry.with(fmt::layer().compact().with_target(true)).try_init().is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Tracing initialised");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_level() {
        let config = LoggingConfig { level: "slotwise=loud".to_string(), json: false };

        if std::env::var("RUST_LOG").is_err() {
            assert!(matches!(env_filter(&config), Err(SchedulingError::Config(_))));
        }
    }

    #[test]
    fn test_init_is_idempotent() {
        let config = LoggingConfig::default();

        init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }
}
