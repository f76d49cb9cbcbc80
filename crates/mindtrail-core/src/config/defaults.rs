//! Default values for every config field.

// Engine
pub const DEFAULT_BUFFER_CAPACITY: usize = 1000;
pub const DEFAULT_CYCLE_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_MIN_ACTIONS_PER_CYCLE: usize = 10;
pub const DEFAULT_EVICTION_THRESHOLD: f64 = crate::constants::EVICTION_THRESHOLD;
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
pub const DEFAULT_PREDICTION_LIMIT: usize = 3;

// Mining
pub const DEFAULT_MIN_NGRAM: usize = 2;
pub const DEFAULT_MAX_NGRAM: usize = 5;
pub const DEFAULT_MIN_SEQUENCE_SUPPORT: u64 = 3;
pub const DEFAULT_TEMPORAL_GAP_MS: i64 = 2000;
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 2;
pub const DEFAULT_TEMPORAL_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_HIGH_FREQUENCY_SHARE: f64 = 0.25;

// Observability
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
