//! Heuristic classifier: an ordered decision list, first match wins.
//!
//! | # | Rule | Label |
//! |---|------|-------|
//! | 1 | sequence whose segments are all identical | `confirmation_bias` |
//! | 2 | name contains `back` or `cancel` | `loss_aversion` |
//! | 3 | name contains `next` or `continue` | `progressive_disclosure` |
//! | 4 | frequency > 10 | `habit_formation` |
//! | 5 | confidence > 0.8 | `anchoring_bias` |
//! | - | fallback | `general_pattern` |

use mindtrail_core::models::{HeuristicLabel, Pattern};

/// Type alias for rule check functions.
pub type RuleCheckFn = fn(&Pattern) -> bool;

/// One entry of the decision list.
pub struct ClassificationRule {
    /// Rule identifier.
    pub id: &'static str,
    pub check: RuleCheckFn,
    pub label: HeuristicLabel,
}

/// Label assigned when no rule matches.
pub const FALLBACK_LABEL: HeuristicLabel = HeuristicLabel::GeneralPattern;

const HABIT_FREQUENCY: u64 = 10;
const ANCHORING_CONFIDENCE: f64 = 0.8;

static RULES: [ClassificationRule; 5] = [
    ClassificationRule {
        id: "uniform_sequence",
        check: is_uniform_sequence,
        label: HeuristicLabel::ConfirmationBias,
    },
    ClassificationRule {
        id: "retreat_action",
        check: mentions_retreat,
        label: HeuristicLabel::LossAversion,
    },
    ClassificationRule {
        id: "forward_action",
        check: mentions_progress,
        label: HeuristicLabel::ProgressiveDisclosure,
    },
    ClassificationRule {
        id: "habitual_frequency",
        check: is_habitual,
        label: HeuristicLabel::HabitFormation,
    },
    ClassificationRule {
        id: "high_confidence",
        check: is_high_confidence,
        label: HeuristicLabel::AnchoringBias,
    },
];

/// The decision list in evaluation order (fallback excluded).
pub fn rules() -> &'static [ClassificationRule] {
    &RULES
}

/// Label a single pattern, ignoring any label it already carries.
pub fn classify(pattern: &Pattern) -> HeuristicLabel {
    RULES
        .iter()
        .find(|rule| (rule.check)(pattern))
        .map_or(FALLBACK_LABEL, |rule| rule.label)
}

/// Label every pattern that has no heuristic yet. Returns how many were labelled.
pub fn classify_all(patterns: &mut [Pattern]) -> usize {
    let mut labelled = 0;
    for pattern in patterns.iter_mut().filter(|p| p.heuristic.is_none()) {
        pattern.heuristic = Some(classify(pattern));
        labelled += 1;
    }
    labelled
}

fn is_uniform_sequence(pattern: &Pattern) -> bool {
    pattern
        .segments()
        .is_some_and(|segments| segments.windows(2).all(|pair| pair[0] == pair[1]))
}

fn mentions_retreat(pattern: &Pattern) -> bool {
    pattern.name.contains("back") || pattern.name.contains("cancel")
}

fn mentions_progress(pattern: &Pattern) -> bool {
    pattern.name.contains("next") || pattern.name.contains("continue")
}

fn is_habitual(pattern: &Pattern) -> bool {
    pattern.frequency > HABIT_FREQUENCY
}

fn is_high_confidence(pattern: &Pattern) -> bool {
    pattern.confidence > ANCHORING_CONFIDENCE
}
