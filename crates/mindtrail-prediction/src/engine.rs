//! Prefix matching and ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use mindtrail_core::config::defaults;
use mindtrail_core::models::Pattern;
use tracing::trace;

use crate::candidate::PredictedAction;

/// Number of candidates returned when the caller has no preference.
pub const DEFAULT_LIMIT: usize = defaults::DEFAULT_PREDICTION_LIMIT;

/// Predict up to `limit` next action types.
///
/// For every sequence pattern with `k` segments, the last `k - 1` entries of
/// `recent_types` must equal its first `k - 1` segments. Results are ordered
/// by score descending, ties by action type.
pub fn predict_next(patterns: &[Pattern], recent_types: &[&str], limit: usize) -> Vec<PredictedAction> {
    let mut scores: HashMap<&str, PredictedAction> = HashMap::new();

    for pattern in patterns {
        let Some(segments) = pattern.segments() else {
            continue;
        };
        let Some((next, prefix)) = segments.split_last() else {
            continue;
        };
        if !matches_tail(prefix, recent_types) {
            continue;
        }
        scores
            .entry(*next)
            .or_insert_with(|| PredictedAction::new(next))
            .support(&pattern.name, pattern.confidence);
    }

    let mut ranked: Vec<PredictedAction> = scores.into_values().collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.action_type.cmp(&b.action_type))
    });
    ranked.truncate(limit);

    trace!(
        patterns = patterns.len(),
        recent = recent_types.len(),
        predicted = ranked.len(),
        "prediction complete"
    );
    ranked
}

fn matches_tail(prefix: &[&str], recent_types: &[&str]) -> bool {
    !prefix.is_empty() && recent_types.ends_with(prefix)
}
