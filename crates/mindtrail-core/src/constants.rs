/// Mindtrail system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Separator between action types in a sequence pattern name.
pub const SEQUENCE_SEPARATOR: &str = "->";

/// Name given to every temporal-cluster pattern.
pub const TEMPORAL_CLUSTER_NAME: &str = "temporal_cluster";

/// Prefix of frequency pattern names; the action type follows.
pub const HIGH_FREQUENCY_PREFIX: &str = "high_frequency_";

/// Patterns whose confidence falls strictly below this are evicted.
pub const EVICTION_THRESHOLD: f64 = 0.1;
