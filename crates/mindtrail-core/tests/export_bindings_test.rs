//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p mindtrail-core export_bindings
//! Generated files appear in mindtrail-core/bindings/*.ts

#[test]
fn export_bindings() {
    use mindtrail_core::models::{
        Action, CognitiveKind, CognitivePattern, CycleReport, CycleSource, EngineMetrics,
        HeuristicLabel, HeuristicModel, Pattern,
    };

    let _ = std::any::type_name::<Action>();
    let _ = std::any::type_name::<Pattern>();
    let _ = std::any::type_name::<HeuristicLabel>();
    let _ = std::any::type_name::<HeuristicModel>();
    let _ = std::any::type_name::<CognitiveKind>();
    let _ = std::any::type_name::<CognitivePattern>();
    let _ = std::any::type_name::<CycleReport>();
    let _ = std::any::type_name::<CycleSource>();
    let _ = std::any::type_name::<EngineMetrics>();
}
