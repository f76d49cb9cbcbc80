//! Tracing setup: subscriber installation and span definitions.

pub mod spans;

use mindtrail_core::config::ObservabilityConfig;
use mindtrail_core::errors::{MindtrailError, MindtrailResult};
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the configured log level.
pub const LOG_ENV_VAR: &str = "MINDTRAIL_LOG";

/// Filter from `MINDTRAIL_LOG`, falling back to the configured level.
pub fn build_filter(config: &ObservabilityConfig) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(&config.log_level))
}

/// Install the global tracing subscriber.
///
/// Emits JSON lines when `config.json` is set, human-readable output
/// otherwise. Fails if a global subscriber is already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> MindtrailResult<()> {
    let filter = build_filter(config);
    let installed = if config.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .json()
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .try_init()
    };
    installed.map_err(|e| MindtrailError::ConfigError(format!("tracing init failed: {e}")))
}
