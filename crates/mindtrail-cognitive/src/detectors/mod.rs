//! The five bias detectors. Each returns at most one result.

pub mod anchoring;
pub mod availability;
pub mod confirmation;
pub mod loss_aversion;
pub mod overload;

use mindtrail_core::models::{Action, CognitiveKind, CognitivePattern};

/// Type alias for detector functions.
pub type DetectFn = fn(&[Action]) -> Option<CognitivePattern>;

/// A registered detector.
pub struct Detector {
    pub kind: CognitiveKind,
    pub detect: DetectFn,
}

static DETECTORS: [Detector; 5] = [
    Detector {
        kind: CognitiveKind::ConfirmationBias,
        detect: confirmation::detect,
    },
    Detector {
        kind: CognitiveKind::AnchoringEffect,
        detect: anchoring::detect,
    },
    Detector {
        kind: CognitiveKind::LossAversion,
        detect: loss_aversion::detect,
    },
    Detector {
        kind: CognitiveKind::AvailabilityHeuristic,
        detect: availability::detect,
    },
    Detector {
        kind: CognitiveKind::CognitiveOverload,
        detect: overload::detect,
    },
];

/// All detectors in evaluation order.
pub fn detectors() -> &'static [Detector] {
    &DETECTORS
}
