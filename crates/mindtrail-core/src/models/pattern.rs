use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Action;
use crate::constants::SEQUENCE_SEPARATOR;

/// Cognitive-bias / heuristic label attached to a mined pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicLabel {
    ConfirmationBias,
    LossAversion,
    ProgressiveDisclosure,
    HabitFormation,
    AnchoringBias,
    GeneralPattern,
    TemporalProximity,
    AvailabilityHeuristic,
}

impl HeuristicLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConfirmationBias => "confirmation_bias",
            Self::LossAversion => "loss_aversion",
            Self::ProgressiveDisclosure => "progressive_disclosure",
            Self::HabitFormation => "habit_formation",
            Self::AnchoringBias => "anchoring_bias",
            Self::GeneralPattern => "general_pattern",
            Self::TemporalProximity => "temporal_proximity",
            Self::AvailabilityHeuristic => "availability_heuristic",
        }
    }
}

impl fmt::Display for HeuristicLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recurring structure mined from a window of actions.
///
/// `confidence` is nominally in [0, 1] but is never clamped: merges use a
/// two-point average and externally synced values pass through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pattern {
    pub id: String,
    /// `a->b->c` for sequences, otherwise a fixed label.
    pub name: String,
    pub frequency: u64,
    pub confidence: f64,
    /// Evidencing actions; only populated for temporal clusters.
    #[serde(default)]
    pub actions: Option<Vec<Action>>,
    #[serde(default)]
    pub heuristic: Option<HeuristicLabel>,
}

impl Pattern {
    pub fn new(id: impl Into<String>, name: impl Into<String>, frequency: u64, confidence: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            frequency,
            confidence,
            actions: None,
            heuristic: None,
        }
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicLabel) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    pub fn with_actions(mut self, actions: Vec<Action>) -> Self {
        self.actions = Some(actions);
        self
    }

    /// Whether the name is a `->`-joined action sequence.
    pub fn is_sequence(&self) -> bool {
        self.name.contains(SEQUENCE_SEPARATOR)
    }

    /// The action types of a sequence pattern, `None` for every other kind.
    pub fn segments(&self) -> Option<Vec<&str>> {
        if !self.is_sequence() {
            return None;
        }
        Some(self.name.split(SEQUENCE_SEPARATOR).collect())
    }
}
