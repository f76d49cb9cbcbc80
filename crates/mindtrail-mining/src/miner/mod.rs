//! PatternMiner: runs the three extraction passes over one buffer snapshot.

pub mod frequency;
pub mod sequence;
pub mod temporal;

use mindtrail_core::config::{MiningConfig, PatternIdentity};
use mindtrail_core::models::{Action, Pattern};
use tracing::debug;

/// Stateless miner parameterised by thresholds and the identity mode.
#[derive(Debug, Clone, Default)]
pub struct PatternMiner {
    config: MiningConfig,
    identity: PatternIdentity,
}

impl PatternMiner {
    pub fn new(config: MiningConfig, identity: PatternIdentity) -> Self {
        Self { config, identity }
    }

    pub fn config(&self) -> &MiningConfig {
        &self.config
    }

    /// Mine candidate patterns. Output order is sequences, then temporal
    /// clusters, then high-frequency types.
    pub fn mine(&self, actions: &[Action]) -> Vec<Pattern> {
        let sequences = sequence::extract(actions, &self.config, self.identity);
        let clusters = temporal::extract(actions, &self.config, self.identity);
        let frequent = frequency::extract(actions, &self.config, self.identity);

        debug!(
            window = actions.len(),
            sequences = sequences.len(),
            clusters = clusters.len(),
            frequent = frequent.len(),
            "mined candidate patterns"
        );

        let mut patterns = sequences;
        patterns.extend(clusters);
        patterns.extend(frequent);
        patterns
    }
}

/// Share of `count` over `total`, 0.0 for an empty window.
pub(crate) fn ratio(count: u64, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64
}
