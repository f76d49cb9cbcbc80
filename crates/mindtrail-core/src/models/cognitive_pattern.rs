use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The five session-level bias detections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveKind {
    ConfirmationBias,
    AnchoringEffect,
    LossAversion,
    AvailabilityHeuristic,
    CognitiveOverload,
}

impl CognitiveKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::ConfirmationBias => "Confirmation Bias",
            Self::AnchoringEffect => "Anchoring Effect",
            Self::LossAversion => "Loss Aversion",
            Self::AvailabilityHeuristic => "Availability Heuristic",
            Self::CognitiveOverload => "Cognitive Overload",
        }
    }
}

/// A bias detected across one analysis unit (e.g. a session).
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitivePattern {
    #[serde(rename = "type")]
    pub kind: CognitiveKind,
    pub name: String,
    pub description: String,
    /// In [0, 1]; meaning differs per kind.
    pub strength: f64,
    pub detected_at: DateTime<Utc>,
}

impl CognitivePattern {
    pub fn new(kind: CognitiveKind, description: impl Into<String>, strength: f64) -> Self {
        Self {
            kind,
            name: kind.name().to_string(),
            description: description.into(),
            strength,
            detected_at: Utc::now(),
        }
    }
}
