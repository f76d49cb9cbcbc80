use mindtrail_core::config::{MindtrailConfig, PatternIdentity};
use mindtrail_core::models::{Action, CognitiveKind, CycleSource, HeuristicLabel, Pattern};
use mindtrail_engine::{BehaviorEngine, EventBuffer, ModelStore};
use proptest::prelude::*;
use test_fixtures::{actions_from_types, load_session};

fn loaded_engine(config: MindtrailConfig, actions: Vec<Action>) -> BehaviorEngine {
    let engine = BehaviorEngine::from_config(config).unwrap();
    for action in actions {
        engine.record(action).unwrap();
    }
    engine
}

#[test]
fn click_back_loop_end_to_end() {
    let actions = load_session("click_back_loop").actions;
    let engine = loaded_engine(MindtrailConfig::default(), actions.clone());

    let report = engine.run_cycle().unwrap().unwrap();
    assert_eq!(report.version, 1);
    assert_eq!(report.source, CycleSource::Mining);
    assert_eq!(report.actions_mined, 12);

    let model = engine.current_model().unwrap();
    assert!(model.find_by_name("click->click->click").is_some());
    assert!(model.patterns.iter().any(|p| {
        p.heuristic == Some(HeuristicLabel::LossAversion) && p.name.contains("back")
    }));

    let cognitive = engine.analyze_cognitive_patterns(&actions);
    assert!(!cognitive.iter().any(|c| c.kind == CognitiveKind::LossAversion));
}

#[test]
fn cycles_do_not_drain_the_buffer() {
    let actions = load_session("click_back_loop").actions;
    let engine = loaded_engine(MindtrailConfig::default(), actions);
    engine.run_cycle().unwrap();

    let metrics = engine.metrics().unwrap();
    assert_eq!(metrics.buffer_size, 12);
    assert_eq!(metrics.model_version, 1);
    assert_eq!(metrics.history_length, 1);
    assert_eq!(metrics.cycle_interval_ms, 5000);
}

#[test]
fn undersized_buffer_skips_the_cycle() {
    let actions = actions_from_types(&["click"; 9], 100);
    let engine = loaded_engine(MindtrailConfig::default(), actions);
    assert!(engine.run_cycle().unwrap().is_none());
    let model = engine.current_model().unwrap();
    assert_eq!(model.version, 0);
    assert!(model.last_updated.is_none());
}

#[test]
fn generated_ids_never_coalesce_across_cycles() {
    let actions = load_session("click_back_loop").actions;
    let engine = loaded_engine(MindtrailConfig::default(), actions);

    let first = engine.run_cycle().unwrap().unwrap();
    let second = engine.run_cycle().unwrap().unwrap();
    assert_eq!(second.updated, 0);
    assert_eq!(
        engine.metrics().unwrap().pattern_count,
        first.inserted + second.inserted
    );
}

#[test]
fn name_identity_merges_repeated_cycles() {
    let mut config = MindtrailConfig::default();
    config.engine.pattern_identity = PatternIdentity::Name;
    let actions = load_session("click_back_loop").actions;
    let engine = loaded_engine(config, actions);

    engine.run_cycle().unwrap();
    let after_one = engine.current_model().unwrap();
    engine.run_cycle().unwrap();
    let after_two = engine.current_model().unwrap();

    assert_eq!(after_one.patterns.len(), after_two.patterns.len());
    let triple_one = after_one.find_by_name("click->click->click").unwrap();
    let triple_two = after_two.find_by_name("click->click->click").unwrap();
    assert_eq!(triple_two.frequency, triple_one.frequency * 2);
    assert!((triple_two.confidence - triple_one.confidence).abs() < 1e-12);
}

#[test]
fn name_identity_folds_clusters_within_one_cycle() {
    let mut config = MindtrailConfig::default();
    config.engine.pattern_identity = PatternIdentity::Name;
    let actions = load_session("checkout_flow").actions;
    let first_timestamp = actions[0].timestamp;
    let engine = loaded_engine(config, actions);

    engine.run_cycle().unwrap();
    let model = engine.current_model().unwrap();
    let clusters: Vec<&Pattern> = model
        .patterns
        .iter()
        .filter(|p| p.name == "temporal_cluster")
        .collect();
    assert_eq!(clusters.len(), 1);
    assert_eq!(clusters[0].frequency, 15);
    let evidence = clusters[0].actions.as_ref().unwrap();
    assert_eq!(evidence.len(), 3);
    assert_eq!(evidence[0].timestamp, first_timestamp);
}

#[test]
fn oversized_frequency_keeps_engine_usable() {
    let engine = BehaviorEngine::with_defaults();
    engine
        .sync(vec![Pattern::new("p1", "a->b", u64::MAX - 1, 0.5)])
        .unwrap();
    engine.sync(vec![Pattern::new("p1", "a->b", 5, 0.5)]).unwrap();

    let model = engine.current_model().unwrap();
    assert_eq!(model.patterns[0].frequency, u64::MAX);
    engine.record(Action::new("click", 0)).unwrap();
    assert_eq!(engine.metrics().unwrap().buffer_size, 1);
}

#[test]
fn sync_classifies_merges_and_versions() {
    let engine = BehaviorEngine::with_defaults();
    let version = engine
        .sync(vec![
            Pattern::new("p1", "view->next->confirm", 4, 0.6),
            Pattern::new("p2", "noise", 1, 0.05),
            Pattern::new("p3", "open->edit", 12, 0.5)
                .with_heuristic(HeuristicLabel::AnchoringBias),
        ])
        .unwrap();
    assert_eq!(version, 1);

    let model = engine.current_model().unwrap();
    assert_eq!(model.version, 1);
    assert!(model.last_updated.is_some());
    assert!(model.find_by_name("noise").is_none());
    assert_eq!(
        model.find_by_name("view->next->confirm").unwrap().heuristic,
        Some(HeuristicLabel::ProgressiveDisclosure)
    );
    assert_eq!(
        model.find_by_name("open->edit").unwrap().heuristic,
        Some(HeuristicLabel::AnchoringBias)
    );

    let history = engine.history().unwrap();
    assert_eq!(history[0].source, CycleSource::Sync);
    assert_eq!(history[0].pruned, 1);
    // Syncs do not count as mining cycles.
    assert!(engine.metrics().unwrap().last_cycle_at.is_none());
}

#[test]
fn predicts_from_synced_funnel() {
    let engine = BehaviorEngine::with_defaults();
    engine
        .sync(vec![Pattern::new("p1", "click->select->submit", 3, 0.6)])
        .unwrap();

    let recent = actions_from_types(&["open", "click", "select"], 300);
    let predicted = engine.predict(&recent).unwrap();
    assert!(predicted.iter().any(|p| p.action_type == "submit"));
}

#[test]
fn prediction_respects_configured_limit() {
    let mut config = MindtrailConfig::default();
    config.engine.prediction_limit = 1;
    let engine = BehaviorEngine::from_config(config).unwrap();
    engine
        .sync(vec![
            Pattern::new("p1", "a->b", 3, 0.6),
            Pattern::new("p2", "a->c", 3, 0.9),
        ])
        .unwrap();

    let predicted = engine.predict(&actions_from_types(&["a"], 100)).unwrap();
    assert_eq!(predicted.len(), 1);
    assert_eq!(predicted[0].action_type, "c");
}

#[test]
fn merging_the_same_pattern_twice_is_not_idempotent() {
    let engine = BehaviorEngine::with_defaults();
    engine.sync(vec![Pattern::new("p1", "a->b", 3, 0.9)]).unwrap();
    engine.sync(vec![Pattern::new("p1", "a->b", 3, 0.5)]).unwrap();

    let model = engine.current_model().unwrap();
    let merged = &model.patterns[0];
    assert_eq!(merged.frequency, 6);
    assert!((merged.confidence - 0.7).abs() < 1e-12);
    assert_eq!(model.version, 2);
}

#[test]
fn buffer_evicts_at_capacity() {
    let mut config = MindtrailConfig::default();
    config.engine.buffer_capacity = 5;
    let engine = loaded_engine(config, actions_from_types(&["a"; 8], 10));
    assert_eq!(engine.metrics().unwrap().buffer_size, 5);
}

#[test]
fn model_serializes_for_persistence() {
    let engine = BehaviorEngine::with_defaults();
    engine
        .sync(vec![Pattern::new("p1", "back->back", 3, 0.4)])
        .unwrap();
    let json = serde_json::to_value(engine.current_model().unwrap()).unwrap();
    assert_eq!(json["version"], 1);
    assert_eq!(json["patterns"][0]["heuristic"], "confirmation_bias");
}

fn arb_patterns() -> impl Strategy<Value = Vec<Pattern>> {
    prop::collection::vec((0.0f64..1.0, 1u64..20), 0..30).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (confidence, frequency))| {
                Pattern::new(format!("p{i}"), format!("a->t{}", i % 4), frequency, confidence)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn snapshot_is_sorted_by_confidence(patterns in arb_patterns()) {
        let engine = BehaviorEngine::with_defaults();
        engine.sync(patterns).unwrap();
        let model = engine.current_model().unwrap();
        for pair in model.patterns.windows(2) {
            prop_assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn prune_removes_exactly_the_low_confidence_entries(patterns in arb_patterns()) {
        let below = patterns.iter().filter(|p| p.confidence < 0.1).count();
        let total = patterns.len();
        let mut store = ModelStore::new();
        store.merge(patterns);

        prop_assert_eq!(store.prune(0.1), below);
        prop_assert_eq!(store.len(), total - below);
        prop_assert!(store.ranked().iter().all(|p| p.confidence >= 0.1));
    }

    #[test]
    fn buffer_never_exceeds_capacity(capacity in 1usize..50, pushes in 0usize..120) {
        let mut buffer = EventBuffer::new(capacity);
        for i in 0..pushes {
            buffer.push(Action::new("tick", i as i64));
            prop_assert!(buffer.len() <= capacity);
        }
        prop_assert_eq!(buffer.len(), pushes.min(capacity));
        if let Some(last) = buffer.snapshot().last() {
            prop_assert_eq!(last.timestamp, pushes as i64 - 1);
        }
    }

    #[test]
    fn accuracy_is_mean_confidence(patterns in arb_patterns()) {
        let expected = if patterns.is_empty() {
            0.0
        } else {
            patterns.iter().map(|p| p.confidence).sum::<f64>() / patterns.len() as f64
        };
        let mut store = ModelStore::new();
        store.merge(patterns);
        prop_assert!((store.accuracy() - expected).abs() < 1e-9);
    }
}
