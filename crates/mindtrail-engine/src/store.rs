//! Identity-keyed pattern store with running-average merges.

use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::{DateTime, Utc};
use mindtrail_core::models::{HeuristicModel, Pattern};

/// Counts from one merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    pub inserted: usize,
    pub updated: usize,
}

/// Live pattern records keyed by pattern id.
#[derive(Debug, Clone, Default)]
pub struct ModelStore {
    patterns: HashMap<String, Pattern>,
}

impl ModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge incoming patterns by id.
    ///
    /// An existing entry takes `confidence = (old + new) / 2` and
    /// `frequency += new.frequency` (saturating), and keeps its label unless it had none.
    /// Confidence is not clamped.
    pub fn merge(&mut self, incoming: Vec<Pattern>) -> MergeOutcome {
        let mut outcome = MergeOutcome::default();
        for pattern in incoming {
            match self.patterns.get_mut(&pattern.id) {
                Some(existing) => {
                    existing.confidence = (existing.confidence + pattern.confidence) / 2.0;
                    existing.frequency = existing.frequency.saturating_add(pattern.frequency);
                    if existing.heuristic.is_none() {
                        existing.heuristic = pattern.heuristic;
                    }
                    outcome.updated += 1;
                }
                None => {
                    self.patterns.insert(pattern.id.clone(), pattern);
                    outcome.inserted += 1;
                }
            }
        }
        outcome
    }

    /// Remove every pattern with confidence strictly below `threshold`.
    pub fn prune(&mut self, threshold: f64) -> usize {
        let before = self.patterns.len();
        self.patterns.retain(|_, p| p.confidence >= threshold);
        before - self.patterns.len()
    }

    /// Patterns by descending confidence, ties by name then id.
    pub fn ranked(&self) -> Vec<Pattern> {
        let mut patterns: Vec<Pattern> = self.patterns.values().cloned().collect();
        patterns.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.name.cmp(&b.name))
                .then_with(|| a.id.cmp(&b.id))
        });
        patterns
    }

    /// Mean confidence, 0.0 when empty.
    pub fn accuracy(&self) -> f64 {
        if self.patterns.is_empty() {
            return 0.0;
        }
        self.patterns.values().map(|p| p.confidence).sum::<f64>() / self.patterns.len() as f64
    }

    pub fn snapshot(&self, version: u64, last_updated: Option<DateTime<Utc>>) -> HeuristicModel {
        HeuristicModel {
            version,
            patterns: self.ranked(),
            accuracy: self.accuracy(),
            last_updated,
        }
    }

    pub fn get(&self, id: &str) -> Option<&Pattern> {
        self.patterns.get(id)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use mindtrail_core::models::HeuristicLabel;

    use super::*;

    #[test]
    fn merge_averages_and_accumulates() {
        let mut store = ModelStore::new();
        let first = store.merge(vec![Pattern::new("p1", "a->b", 3, 0.8)]);
        assert_eq!(first, MergeOutcome { inserted: 1, updated: 0 });

        let second = store.merge(vec![Pattern::new("p1", "a->b", 2, 0.4)]);
        assert_eq!(second, MergeOutcome { inserted: 0, updated: 1 });

        let merged = store.get("p1").unwrap();
        assert!((merged.confidence - 0.6).abs() < 1e-12);
        assert_eq!(merged.frequency, 5);
    }

    #[test]
    fn frequency_saturates_instead_of_overflowing() {
        let mut store = ModelStore::new();
        store.merge(vec![Pattern::new("p1", "a->b", u64::MAX - 1, 0.5)]);
        store.merge(vec![Pattern::new("p1", "a->b", 5, 0.5)]);
        assert_eq!(store.get("p1").unwrap().frequency, u64::MAX);
    }

    #[test]
    fn merge_fills_missing_label_only() {
        let mut store = ModelStore::new();
        store.merge(vec![Pattern::new("p1", "a->b", 3, 0.5)]);
        store.merge(vec![
            Pattern::new("p1", "a->b", 3, 0.5).with_heuristic(HeuristicLabel::HabitFormation)
        ]);
        assert_eq!(store.get("p1").unwrap().heuristic, Some(HeuristicLabel::HabitFormation));

        store.merge(vec![
            Pattern::new("p1", "a->b", 3, 0.5).with_heuristic(HeuristicLabel::GeneralPattern)
        ]);
        assert_eq!(store.get("p1").unwrap().heuristic, Some(HeuristicLabel::HabitFormation));
    }

    #[test]
    fn merged_confidence_is_not_clamped() {
        let mut store = ModelStore::new();
        store.merge(vec![Pattern::new("p1", "a->b", 1, 1.5)]);
        store.merge(vec![Pattern::new("p1", "a->b", 1, 1.1)]);
        assert!((store.get("p1").unwrap().confidence - 1.3).abs() < 1e-12);
    }

    #[test]
    fn prune_keeps_threshold_boundary() {
        let mut store = ModelStore::new();
        store.merge(vec![
            Pattern::new("low", "x", 1, 0.09),
            Pattern::new("edge", "y", 1, 0.1),
            Pattern::new("high", "z", 1, 0.5),
        ]);
        assert_eq!(store.prune(0.1), 1);
        assert!(store.get("low").is_none());
        assert!(store.get("edge").is_some());
    }

    #[test]
    fn ranked_breaks_ties_by_name_then_id() {
        let mut store = ModelStore::new();
        store.merge(vec![
            Pattern::new("2", "b", 1, 0.5),
            Pattern::new("3", "a", 1, 0.5),
            Pattern::new("1", "a", 1, 0.5),
            Pattern::new("4", "c", 1, 0.9),
        ]);
        let ids: Vec<String> = store.ranked().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["4", "1", "3", "2"]);
    }

    #[test]
    fn empty_store_has_zero_accuracy() {
        let store = ModelStore::new();
        let model = store.snapshot(0, None);
        assert!(model.is_empty());
        assert_eq!(model.accuracy, 0.0);
    }
}
