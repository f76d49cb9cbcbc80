//! Per-type frequency spikes.

use std::collections::HashMap;

use mindtrail_core::config::{MiningConfig, PatternIdentity};
use mindtrail_core::constants::HIGH_FREQUENCY_PREFIX;
use mindtrail_core::models::{Action, HeuristicLabel, Pattern};

use super::ratio;
use crate::identity::assign_id;

/// Emit a `high_frequency_<type>` pattern for every action type whose count
/// reaches `high_frequency_share` of the window. Ordered by first occurrence.
pub fn extract(
    actions: &[Action],
    config: &MiningConfig,
    identity: PatternIdentity,
) -> Vec<Pattern> {
    let total = actions.len();
    if total == 0 {
        return Vec::new();
    }

    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for action in actions {
        let ty = action.action_type.as_str();
        let count = counts.entry(ty).or_insert_with(|| {
            first_seen.push(ty);
            0
        });
        *count += 1;
    }

    let min_count = config.high_frequency_share * total as f64;
    first_seen
        .into_iter()
        .filter_map(|ty| {
            let count = counts[ty];
            if (count as f64) < min_count {
                return None;
            }
            let name = format!("{HIGH_FREQUENCY_PREFIX}{ty}");
            Some(
                Pattern::new(assign_id(identity, &name), name, count, ratio(count, total))
                    .with_heuristic(HeuristicLabel::AvailabilityHeuristic),
            )
        })
        .collect()
}
