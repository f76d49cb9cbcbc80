use mindtrail_core::models::{Action, CognitiveKind, CognitivePattern};

use crate::share;

/// Cancel-like, back-like, and undo-like action types.
pub const RETREAT_ACTIONS: [&str; 9] = [
    "cancel", "close", "exit", "back", "previous", "return", "undo", "revert", "restore",
];
/// Fires when the retreat share exceeds this.
pub const THRESHOLD: f64 = 0.3;

/// A session dominated by backing out of choices.
pub fn detect(actions: &[Action]) -> Option<CognitivePattern> {
    let retreats = actions
        .iter()
        .filter(|a| RETREAT_ACTIONS.contains(&a.action_type.as_str()))
        .count();
    let strength = share(retreats, actions.len());
    if strength <= THRESHOLD {
        return None;
    }
    Some(CognitivePattern::new(
        CognitiveKind::LossAversion,
        format!("{retreats} of {} actions back out of a choice", actions.len()),
        strength,
    ))
}
