use serde::{Deserialize, Serialize};

use super::defaults;

/// Pattern miner thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Shortest n-gram length considered.
    pub min_ngram: usize,
    /// Longest n-gram length considered.
    pub max_ngram: usize,
    /// Minimum occurrences for a sequence to become a pattern.
    pub min_sequence_support: u64,
    /// A gap larger than this (ms) between consecutive actions splits clusters.
    pub temporal_gap_ms: i64,
    /// Minimum actions in a temporal cluster.
    pub min_cluster_size: usize,
    /// Fixed confidence assigned to temporal clusters.
    pub temporal_confidence: f64,
    /// Minimum share of the window for a high-frequency action type.
    pub high_frequency_share: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_ngram: defaults::DEFAULT_MIN_NGRAM,
            max_ngram: defaults::DEFAULT_MAX_NGRAM,
            min_sequence_support: defaults::DEFAULT_MIN_SEQUENCE_SUPPORT,
            temporal_gap_ms: defaults::DEFAULT_TEMPORAL_GAP_MS,
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            temporal_confidence: defaults::DEFAULT_TEMPORAL_CONFIDENCE,
            high_frequency_share: defaults::DEFAULT_HIGH_FREQUENCY_SHARE,
        }
    }
}
