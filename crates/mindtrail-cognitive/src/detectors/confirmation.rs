use std::collections::HashMap;

use mindtrail_core::models::{Action, CognitiveKind, CognitivePattern};

use crate::share;

/// Fires when the top action type exceeds this share.
pub const THRESHOLD: f64 = 0.7;

/// The single most frequent action type dominating the session.
///
/// Ties go to the type that occurred first. Strength is the top type's share.
pub fn detect(actions: &[Action]) -> Option<CognitivePattern> {
    let (top_type, top_count) = most_frequent(actions)?;
    let strength = share(top_count, actions.len());
    if strength <= THRESHOLD {
        return None;
    }
    Some(CognitivePattern::new(
        CognitiveKind::ConfirmationBias,
        format!(
            "Repeatedly performing '{top_type}' ({:.0}% of actions)",
            strength * 100.0
        ),
        strength,
    ))
}

fn most_frequent(actions: &[Action]) -> Option<(&str, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for action in actions {
        let ty = action.action_type.as_str();
        let count = counts.entry(ty).or_insert_with(|| {
            first_seen.push(ty);
            0
        });
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for ty in first_seen {
        let count = counts[ty];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((ty, count));
        }
    }
    best
}
