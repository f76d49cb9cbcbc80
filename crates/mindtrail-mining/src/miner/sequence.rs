//! Sliding-window n-gram counting.

use std::collections::HashMap;

use mindtrail_core::config::{MiningConfig, PatternIdentity};
use mindtrail_core::constants::SEQUENCE_SEPARATOR;
use mindtrail_core::models::{Action, Pattern};

use super::ratio;
use crate::identity::assign_id;

/// Count every n-gram of action types for n in `[min_ngram, max_ngram]`
/// (bounded by the window length) and keep those seen at least
/// `min_sequence_support` times.
///
/// Confidence is `count / actions.len()`. Patterns are ordered by n, then by
/// the position of their first occurrence. No heuristic label is assigned.
pub fn extract(
    actions: &[Action],
    config: &MiningConfig,
    identity: PatternIdentity,
) -> Vec<Pattern> {
    let total = actions.len();
    let types: Vec<&str> = actions.iter().map(|a| a.action_type.as_str()).collect();
    let mut patterns = Vec::new();

    for n in config.min_ngram..=config.max_ngram.min(total) {
        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut first_seen: Vec<String> = Vec::new();

        for window in types.windows(n) {
            let key = window.join(SEQUENCE_SEPARATOR);
            let count = counts.entry(key.clone()).or_insert_with(|| {
                first_seen.push(key);
                0
            });
            *count += 1;
        }

        for name in first_seen {
            let count = counts[&name];
            if count >= config.min_sequence_support {
                let id = assign_id(identity, &name);
                patterns.push(Pattern::new(id, name, count, ratio(count, total)));
            }
        }
    }

    patterns
}
