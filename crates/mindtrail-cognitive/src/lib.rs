//! # mindtrail-cognitive
//!
//! Scans one analysis unit (typically a session) as a whole and reports the
//! cognitive biases it shows. Stateless: it never touches the engine's buffer
//! or model store.
//!
//! ## 5 Detectors
//!
//! | Detector | Minimum actions | Fires when |
//! |----------|-----------------|------------|
//! | Confirmation bias | 1 | top type share > 0.7 |
//! | Anchoring effect | 5 | share related to the first action > 0.5 |
//! | Loss aversion | 1 | retreat-action share > 0.3 |
//! | Availability heuristic | 10 | preceding-window overlap >= 0.6 |
//! | Cognitive overload | 2 | mean gap < 1000ms or > half the gaps < 500ms |
//!
//! Detectors are independent and may co-fire.

pub mod detectors;
pub mod relations;

use mindtrail_core::models::{Action, CognitivePattern};
use tracing::trace;

pub use detectors::{detectors, Detector};
pub use relations::{are_related, RELATION_GROUPS};

/// Run every detector over `actions` and return the ones that fired.
pub fn analyze(actions: &[Action]) -> Vec<CognitivePattern> {
    let found: Vec<CognitivePattern> = detectors()
        .iter()
        .filter_map(|detector| (detector.detect)(actions))
        .collect();
    trace!(
        actions = actions.len(),
        detected = found.len(),
        "cognitive analysis complete"
    );
    found
}

/// Share of `part` over `whole`, 0.0 for an empty denominator.
pub(crate) fn share(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}
