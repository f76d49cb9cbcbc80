use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What produced a store update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CycleSource {
    /// A mining pass over the event buffer.
    Mining,
    /// An externally supplied model merged through `sync`.
    Sync,
}

/// Outcome of one completed cycle or sync.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CycleReport {
    /// Model version produced by this update.
    pub version: u64,
    pub source: CycleSource,
    pub completed_at: DateTime<Utc>,
    /// Buffered actions mined (0 for syncs).
    pub actions_mined: usize,
    /// Candidate patterns handed to the store.
    pub patterns_mined: usize,
    pub inserted: usize,
    pub updated: usize,
    pub pruned: usize,
    /// Model accuracy after the update.
    pub accuracy: f64,
}
