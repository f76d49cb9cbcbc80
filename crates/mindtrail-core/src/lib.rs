//! # mindtrail-core
//!
//! Foundation crate for the Mindtrail behavioral pattern engine.
//! Defines the event and pattern model, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::MindtrailConfig;
pub use errors::{MindtrailError, MindtrailResult};
pub use models::{
    Action, CognitiveKind, CognitivePattern, HeuristicLabel, HeuristicModel, Pattern,
};
