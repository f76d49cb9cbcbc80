//! # mindtrail-prediction
//!
//! Scores likely next actions by matching the tail of recent activity against
//! stored sequence patterns.
//!
//! A pattern `a->b->c` supports `c` when the last two recent action types are
//! `a, b`. Each supporting pattern adds its confidence to the candidate's
//! score. Temporal clusters and frequency patterns carry no sequence and are
//! never predictive.

pub mod candidate;
pub mod engine;

pub use candidate::PredictedAction;
pub use engine::{predict_next, DEFAULT_LIMIT};
