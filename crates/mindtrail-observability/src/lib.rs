//! # mindtrail-observability
//!
//! Structured tracing for the behavior engine: subscriber installation driven
//! by `[observability]` config, plus span definitions for cycles, syncs, and
//! predictions.

pub mod tracing_setup;

pub use tracing_setup::{build_filter, init_tracing, spans::names, LOG_ENV_VAR};
