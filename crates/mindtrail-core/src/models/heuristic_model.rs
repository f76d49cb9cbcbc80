use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Pattern;

/// Versioned snapshot of the model store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct HeuristicModel {
    /// Incremented by every completed cycle and every sync.
    pub version: u64,
    /// Sorted by descending confidence.
    pub patterns: Vec<Pattern>,
    /// Mean confidence over all patterns, 0.0 when empty.
    pub accuracy: f64,
    /// Time of the last store mutation: a completed mining cycle or a sync.
    pub last_updated: Option<DateTime<Utc>>,
}

impl HeuristicModel {
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Look up a pattern by name. Several entries may share a name; the one
    /// with the highest confidence is returned.
    pub fn find_by_name(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }
}
