use mindtrail_core::models::{Action, CognitiveKind, CognitivePattern};

pub const MIN_ACTIONS: usize = 2;
/// Fires when the mean interval is below this (ms).
pub const MEAN_INTERVAL_MS: f64 = 1000.0;
/// A gap below this (ms) counts as rapid.
pub const RAPID_GAP_MS: i64 = 500;
/// Fires when the rapid share exceeds this.
pub const RAPID_SHARE: f64 = 0.5;
/// Mean interval at which strength reaches zero (ms).
pub const RELAXED_INTERVAL_MS: f64 = 5000.0;

/// Actions arriving faster than they can be considered.
///
/// Strength is `clamp(1 - mean_interval / 5000, 0, 1)`.
pub fn detect(actions: &[Action]) -> Option<CognitivePattern> {
    if actions.len() < MIN_ACTIONS {
        return None;
    }
    let gaps: Vec<i64> = actions
        .windows(2)
        .map(|pair| pair[1].timestamp.saturating_sub(pair[0].timestamp))
        .collect();
    let mean = gaps.iter().map(|gap| *gap as f64).sum::<f64>() / gaps.len() as f64;
    let rapid = gaps.iter().filter(|gap| **gap < RAPID_GAP_MS).count();
    let rapid_share = rapid as f64 / gaps.len() as f64;

    if mean >= MEAN_INTERVAL_MS && rapid_share <= RAPID_SHARE {
        return None;
    }
    let strength = (1.0 - mean / RELAXED_INTERVAL_MS).clamp(0.0, 1.0);
    Some(CognitivePattern::new(
        CognitiveKind::CognitiveOverload,
        format!("Rapid action pace (mean interval {mean:.0}ms)"),
        strength,
    ))
}
