//! Error types for every Mindtrail subsystem.
//!
//! [`MindtrailError`] is the top-level error; subsystem errors convert into it
//! via `From`.

mod engine_error;

pub use engine_error::EngineError;

/// Result alias used across the workspace.
pub type MindtrailResult<T> = Result<T, MindtrailError>;

/// Top-level Mindtrail error.
#[derive(Debug, thiserror::Error)]
pub enum MindtrailError {
    #[error("invalid action: {reason}")]
    InvalidAction { reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("engine error: {0}")]
    EngineError(#[from] EngineError),
}
