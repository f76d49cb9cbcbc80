//! # mindtrail-mining
//!
//! Extracts candidate patterns from a window of buffered actions and labels
//! them with a cognitive-bias heuristic.
//!
//! ## 3 Extraction Passes
//!
//! | Pass | Output name | Confidence |
//! |------|-------------|------------|
//! | Sequence (n-grams, n in 2..=5) | `a->b->c` | count / window length |
//! | Temporal clustering | `temporal_cluster` | fixed 0.7 |
//! | Frequency | `high_frequency_<type>` | count / window length |
//!
//! Pass outputs are concatenated, never merged with each other. Unlabeled
//! patterns then go through the [`classifier`] decision list.

pub mod classifier;
pub mod identity;
pub mod miner;

pub use classifier::{classify, classify_all, ClassificationRule};
pub use identity::assign_id;
pub use miner::PatternMiner;
