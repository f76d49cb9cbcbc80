use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Point-in-time engine counters for the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EngineMetrics {
    pub buffer_size: usize,
    pub pattern_count: usize,
    pub model_version: u64,
    pub last_cycle_at: Option<DateTime<Utc>>,
    pub history_length: usize,
    pub cycle_interval_ms: u64,
}
