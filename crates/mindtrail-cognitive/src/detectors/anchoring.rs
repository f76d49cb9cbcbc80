use mindtrail_core::models::{Action, CognitiveKind, CognitivePattern};

use crate::relations::are_related;
use crate::share;

pub const MIN_ACTIONS: usize = 5;
/// Fires when the related share exceeds this.
pub const THRESHOLD: f64 = 0.5;

/// Later actions staying close to the session's first action.
///
/// Strength is the share of `actions[1..]` related to `actions[0]`.
pub fn detect(actions: &[Action]) -> Option<CognitivePattern> {
    if actions.len() < MIN_ACTIONS {
        return None;
    }
    let (anchor, rest) = actions.split_first()?;
    let related = rest
        .iter()
        .filter(|a| are_related(&anchor.action_type, &a.action_type))
        .count();
    let strength = share(related, rest.len());
    if strength <= THRESHOLD {
        return None;
    }
    Some(CognitivePattern::new(
        CognitiveKind::AnchoringEffect,
        format!(
            "Subsequent actions stay close to the initial '{}' action",
            anchor.action_type
        ),
        strength,
    ))
}
