/// Errors raised by the engine's shared state and its background scheduler.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("lock poisoned: {resource}")]
    LockPoisoned { resource: String },

    #[error("scheduler task failed to join: {reason}")]
    SchedulerJoin { reason: String },
}
