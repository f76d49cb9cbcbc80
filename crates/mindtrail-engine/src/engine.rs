//! BehaviorEngine: owns the buffer and model store behind one RwLock.

use std::collections::VecDeque;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use mindtrail_cognitive::analyze;
use mindtrail_core::config::{EngineConfig, MindtrailConfig};
use mindtrail_core::errors::{EngineError, MindtrailError, MindtrailResult};
use mindtrail_core::models::{
    Action, CognitivePattern, CycleReport, CycleSource, EngineMetrics, HeuristicModel, Pattern,
};
use mindtrail_mining::{classify_all, PatternMiner};
use mindtrail_observability::{cycle_span, prediction_span, sync_span};
use mindtrail_prediction::{predict_next, PredictedAction};
use tracing::{debug, info};

use crate::buffer::EventBuffer;
use crate::store::{MergeOutcome, ModelStore};

/// Shared mutable state guarded by the engine lock.
#[derive(Debug)]
struct EngineState {
    buffer: EventBuffer,
    store: ModelStore,
    version: u64,
    last_cycle_at: Option<DateTime<Utc>>,
    last_updated: Option<DateTime<Utc>>,
    history: VecDeque<CycleReport>,
}

/// The behavioral pattern engine.
///
/// Created once by the host and shared through `Arc`. `record`, `sync`, and
/// `run_cycle` take the write lock; queries take the read lock.
#[derive(Debug)]
pub struct BehaviorEngine {
    config: EngineConfig,
    miner: PatternMiner,
    state: RwLock<EngineState>,
}

impl BehaviorEngine {
    /// Build an engine from a validated configuration.
    pub fn from_config(config: MindtrailConfig) -> MindtrailResult<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    pub fn with_defaults() -> Self {
        Self::build(MindtrailConfig::default())
    }

    fn build(config: MindtrailConfig) -> Self {
        let miner = PatternMiner::new(config.mining, config.engine.pattern_identity);
        let state = EngineState {
            buffer: EventBuffer::new(config.engine.buffer_capacity),
            store: ModelStore::new(),
            version: 0,
            last_cycle_at: None,
            last_updated: None,
            history: VecDeque::with_capacity(config.engine.history_capacity),
        };
        Self {
            config: config.engine,
            miner,
            state: RwLock::new(state),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Ingest one action. Only basic shape validation is applied.
    pub fn record(&self, action: Action) -> MindtrailResult<()> {
        action.validate()?;
        let mut state = self.write_state()?;
        if let Some(evicted) = state.buffer.push(action) {
            debug!(
                evicted_type = %evicted.action_type,
                capacity = state.buffer.capacity(),
                "buffer full, oldest action dropped"
            );
        }
        Ok(())
    }

    /// Run one mining pass over the buffered actions.
    ///
    /// Returns `None` when fewer than `min_actions_per_cycle` actions are
    /// buffered. The buffer is read, not drained.
    pub fn run_cycle(&self) -> MindtrailResult<Option<CycleReport>> {
        let mut state = self.write_state()?;
        let buffered = state.buffer.len();
        if buffered < self.config.min_actions_per_cycle {
            debug!(
                buffered,
                required = self.config.min_actions_per_cycle,
                "not enough actions, cycle skipped"
            );
            return Ok(None);
        }

        let _span = cycle_span!(buffered).entered();
        let actions = state.buffer.snapshot();
        let mut patterns = self.miner.mine(&actions);
        classify_all(&mut patterns);
        let patterns_mined = patterns.len();

        let report = self.apply(&mut state, patterns, CycleSource::Mining, buffered);
        state.last_cycle_at = Some(report.completed_at);
        info!(
            version = report.version,
            patterns_mined,
            pruned = report.pruned,
            accuracy = report.accuracy,
            "mining cycle complete"
        );
        Ok(Some(report))
    }

    /// Merge an externally supplied pattern set with the cycle merge rule.
    /// Unlabeled patterns are classified first. Returns the new model version.
    pub fn sync(&self, mut external: Vec<Pattern>) -> MindtrailResult<u64> {
        let _span = sync_span!(external.len()).entered();
        classify_all(&mut external);
        let mut state = self.write_state()?;
        let report = self.apply(&mut state, external, CycleSource::Sync, 0);
        info!(
            version = report.version,
            inserted = report.inserted,
            updated = report.updated,
            pruned = report.pruned,
            "external model synced"
        );
        Ok(report.version)
    }

    pub fn current_model(&self) -> MindtrailResult<HeuristicModel> {
        let state = self.read_state()?;
        Ok(state.store.snapshot(state.version, state.last_updated))
    }

    pub fn metrics(&self) -> MindtrailResult<EngineMetrics> {
        let state = self.read_state()?;
        Ok(EngineMetrics {
            buffer_size: state.buffer.len(),
            pattern_count: state.store.len(),
            model_version: state.version,
            last_cycle_at: state.last_cycle_at,
            history_length: state.history.len(),
            cycle_interval_ms: self.config.cycle_interval_ms,
        })
    }

    /// Predict likely next actions from the tail of `recent_actions`.
    pub fn predict(&self, recent_actions: &[Action]) -> MindtrailResult<Vec<PredictedAction>> {
        let _span = prediction_span!(recent_actions.len()).entered();
        let recent_types: Vec<&str> = recent_actions
            .iter()
            .map(|a| a.action_type.as_str())
            .collect();
        let patterns = self.read_state()?.store.ranked();
        Ok(predict_next(
            &patterns,
            &recent_types,
            self.config.prediction_limit,
        ))
    }

    /// Run the cognitive detectors over an explicit action list. Does not
    /// touch engine state.
    pub fn analyze_cognitive_patterns(&self, actions: &[Action]) -> Vec<CognitivePattern> {
        analyze(actions)
    }

    /// Completed cycles and syncs, oldest first.
    pub fn history(&self) -> MindtrailResult<Vec<CycleReport>> {
        let state = self.read_state()?;
        Ok(state.history.iter().cloned().collect())
    }

    fn apply(
        &self,
        state: &mut EngineState,
        patterns: Vec<Pattern>,
        source: CycleSource,
        actions_mined: usize,
    ) -> CycleReport {
        let patterns_mined = patterns.len();
        let MergeOutcome { inserted, updated } = state.store.merge(patterns);
        let pruned = state.store.prune(self.config.eviction_threshold);
        let now = Utc::now();
        state.version += 1;
        state.last_updated = Some(now);

        let report = CycleReport {
            version: state.version,
            source,
            completed_at: now,
            actions_mined,
            patterns_mined,
            inserted,
            updated,
            pruned,
            accuracy: state.store.accuracy(),
        };
        state.history.push_back(report.clone());
        while state.history.len() > self.config.history_capacity {
            state.history.pop_front();
        }
        report
    }

    fn read_state(&self) -> MindtrailResult<RwLockReadGuard<'_, EngineState>> {
        self.state.read().map_err(|e| lock_poisoned(&e.to_string()))
    }

    fn write_state(&self) -> MindtrailResult<RwLockWriteGuard<'_, EngineState>> {
        self.state.write().map_err(|e| lock_poisoned(&e.to_string()))
    }
}

fn lock_poisoned(detail: &str) -> MindtrailError {
    EngineError::LockPoisoned {
        resource: format!("engine state ({detail})"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_is_bounded() {
        let mut config = MindtrailConfig::default();
        config.engine.history_capacity = 2;
        let engine = BehaviorEngine::from_config(config).unwrap();
        for _ in 0..3 {
            engine.sync(vec![Pattern::new("p", "a->b", 3, 0.5)]).unwrap();
        }
        let history = engine.history().unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].version, 2);
        assert_eq!(history[1].version, 3);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = MindtrailConfig::default();
        config.engine.buffer_capacity = 0;
        assert!(BehaviorEngine::from_config(config).is_err());
    }

    #[test]
    fn invalid_action_is_rejected() {
        let engine = BehaviorEngine::with_defaults();
        assert!(engine.record(Action::new("", 0)).is_err());
        assert_eq!(engine.metrics().unwrap().buffer_size, 0);
    }
}
