//! Layered configuration: every section falls back to its defaults, so a
//! partial (or empty) TOML document is always valid.

pub mod defaults;
mod engine_config;
mod mining_config;
mod observability_config;

pub use engine_config::{EngineConfig, PatternIdentity};
pub use mining_config::MiningConfig;
pub use observability_config::ObservabilityConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{MindtrailError, MindtrailResult};

/// Root configuration for the whole engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MindtrailConfig {
    pub engine: EngineConfig,
    pub mining: MiningConfig,
    pub observability: ObservabilityConfig,
}

impl MindtrailConfig {
    /// Parse a TOML document. Missing sections and fields take their defaults.
    pub fn from_toml(input: &str) -> MindtrailResult<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| MindtrailError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the engine cannot run with.
    pub fn validate(&self) -> MindtrailResult<()> {
        if self.engine.buffer_capacity == 0 {
            return Err(MindtrailError::ConfigError(
                "engine.buffer_capacity must be greater than zero".to_string(),
            ));
        }
        if self.engine.cycle_interval_ms == 0 {
            return Err(MindtrailError::ConfigError(
                "engine.cycle_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.mining.min_ngram < 2 || self.mining.min_ngram > self.mining.max_ngram {
            return Err(MindtrailError::ConfigError(format!(
                "mining n-gram range [{}, {}] is invalid",
                self.mining.min_ngram, self.mining.max_ngram
            )));
        }
        Ok(())
    }
}
