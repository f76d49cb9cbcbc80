use std::collections::HashSet;

use mindtrail_core::models::{Action, CognitiveKind, CognitivePattern};

use crate::share;

pub const MIN_ACTIONS: usize = 10;
/// Size of both the recent window and the window preceding it.
pub const WINDOW: usize = 5;
/// Fires when the overlap ratio reaches this.
pub const THRESHOLD: f64 = 0.6;

/// Recent behavior echoing what was done just before.
///
/// Compares the types of the last five actions with the five actions
/// preceding them (positions `[n-10, n-5)`). Strength is the fraction of that
/// preceding window whose type reappears in the recent five.
pub fn detect(actions: &[Action]) -> Option<CognitivePattern> {
    let n = actions.len();
    if n < MIN_ACTIONS {
        return None;
    }
    let recent: HashSet<&str> = actions[n - WINDOW..]
        .iter()
        .map(|a| a.action_type.as_str())
        .collect();
    let preceding = &actions[n - 2 * WINDOW..n - WINDOW];
    let matches = preceding
        .iter()
        .filter(|a| recent.contains(a.action_type.as_str()))
        .count();
    let strength = share(matches, preceding.len());
    if strength < THRESHOLD {
        return None;
    }
    Some(CognitivePattern::new(
        CognitiveKind::AvailabilityHeuristic,
        "Recent actions repeat the ones performed just before",
        strength,
    ))
}
