//! Span definitions per engine operation: cycle, sync, prediction.

/// Create a mining cycle span.
#[macro_export]
macro_rules! cycle_span {
    ($buffer_size:expr) => {
        tracing::info_span!("mindtrail.cycle", buffer_size = $buffer_size)
    };
}

/// Create an external sync span.
#[macro_export]
macro_rules! sync_span {
    ($incoming:expr) => {
        tracing::info_span!("mindtrail.sync", incoming = $incoming)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($recent:expr) => {
        tracing::debug_span!("mindtrail.prediction", recent = $recent)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CYCLE: &str = "mindtrail.cycle";
    pub const SYNC: &str = "mindtrail.sync";
    pub const PREDICTION: &str = "mindtrail.prediction";
}
