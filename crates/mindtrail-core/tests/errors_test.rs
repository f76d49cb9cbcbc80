use mindtrail_core::errors::*;

#[test]
fn invalid_action_carries_reason() {
    let err = MindtrailError::InvalidAction {
        reason: "action_type is empty".into(),
    };
    assert!(err.to_string().contains("action_type is empty"));
}

#[test]
fn lock_poisoned_carries_resource() {
    let err = EngineError::LockPoisoned {
        resource: "engine state".into(),
    };
    assert!(err.to_string().contains("engine state"));
}

// --- From impls ---

#[test]
fn engine_error_converts_to_mindtrail_error() {
    let engine_err = EngineError::SchedulerJoin {
        reason: "task panicked".into(),
    };
    let err: MindtrailError = engine_err.into();
    assert!(matches!(err, MindtrailError::EngineError(_)));
    assert!(err.to_string().contains("task panicked"));
}

#[test]
fn serde_error_converts_to_mindtrail_error() {
    let serde_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let err: MindtrailError = serde_err.into();
    assert!(matches!(err, MindtrailError::SerializationError(_)));
}
