use serde::{Deserialize, Serialize};

use super::defaults;

/// How mined patterns are given their identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternIdentity {
    /// A fresh UUID per mined pattern. Same-named patterns from different
    /// cycles stay separate entries in the store.
    #[default]
    Generated,
    /// The pattern name is its identity, so repeated cycles merge into one entry.
    /// All temporal clusters share the name `temporal_cluster`, so they fold into
    /// a single entry that keeps the evidence actions of the first one stored.
    Name,
}

/// Event buffer, model store, and cycle scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum number of buffered actions; the oldest is dropped on overflow.
    pub buffer_capacity: usize,
    /// Period between scheduled mining cycles (milliseconds).
    pub cycle_interval_ms: u64,
    /// A cycle is skipped while fewer actions than this are buffered.
    pub min_actions_per_cycle: usize,
    /// Patterns with confidence strictly below this are pruned after a merge.
    pub eviction_threshold: f64,
    /// Number of cycle reports retained.
    pub history_capacity: usize,
    /// Maximum number of predicted next actions.
    pub prediction_limit: usize,
    pub pattern_identity: PatternIdentity,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: defaults::DEFAULT_BUFFER_CAPACITY,
            cycle_interval_ms: defaults::DEFAULT_CYCLE_INTERVAL_MS,
            min_actions_per_cycle: defaults::DEFAULT_MIN_ACTIONS_PER_CYCLE,
            eviction_threshold: defaults::DEFAULT_EVICTION_THRESHOLD,
            history_capacity: defaults::DEFAULT_HISTORY_CAPACITY,
            prediction_limit: defaults::DEFAULT_PREDICTION_LIMIT,
            pattern_identity: PatternIdentity::default(),
        }
    }
}
