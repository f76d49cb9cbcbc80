//! # mindtrail-engine
//!
//! The stateful half of Mindtrail. A [`BehaviorEngine`] buffers incoming
//! actions, periodically mines them into patterns, merges those into a model
//! store, and answers model, metrics, and prediction queries.
//!
//! ## Cycle
//!
//! 1. Snapshot the event buffer (sliding window, not drained)
//! 2. Mine sequence, temporal, and frequency patterns
//! 3. Label unlabeled patterns
//! 4. Merge into the store by id, then prune low-confidence entries
//! 5. Bump the model version and append a [`CycleReport`](mindtrail_core::models::CycleReport)
//!
//! [`CycleScheduler`] drives step 1 on a fixed interval until stopped.

pub mod buffer;
pub mod engine;
pub mod scheduler;
pub mod store;

pub use buffer::EventBuffer;
pub use engine::BehaviorEngine;
pub use scheduler::{CycleScheduler, SchedulerHandle};
pub use store::{MergeOutcome, ModelStore};
