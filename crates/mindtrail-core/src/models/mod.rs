mod action;
mod cognitive_pattern;
mod cycle_report;
mod engine_metrics;
mod heuristic_model;
mod pattern;

pub use action::Action;
pub use cognitive_pattern::{CognitiveKind, CognitivePattern};
pub use cycle_report::{CycleReport, CycleSource};
pub use engine_metrics::EngineMetrics;
pub use heuristic_model::HeuristicModel;
pub use pattern::{HeuristicLabel, Pattern};
