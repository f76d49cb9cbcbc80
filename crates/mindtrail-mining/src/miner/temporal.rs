//! Single left-to-right partition of the window by inter-action gap.

use mindtrail_core::config::{MiningConfig, PatternIdentity};
use mindtrail_core::constants::TEMPORAL_CLUSTER_NAME;
use mindtrail_core::models::{Action, HeuristicLabel, Pattern};

use crate::identity::assign_id;

/// Split the window wherever the gap to the previous action exceeds
/// `temporal_gap_ms`, and emit every run of at least `min_cluster_size`
/// actions as a `temporal_cluster` pattern.
///
/// Each cluster carries its actions as evidence, `frequency` = cluster size,
/// the fixed `temporal_confidence`, and the `temporal_proximity` label.
pub fn extract(
    actions: &[Action],
    config: &MiningConfig,
    identity: PatternIdentity,
) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    let mut cluster: Vec<Action> = Vec::new();

    for action in actions {
        let splits = cluster
            .last()
            .is_some_and(|prev| action.timestamp - prev.timestamp > config.temporal_gap_ms);
        if splits {
            close_cluster(&mut cluster, config, identity, &mut patterns);
        }
        cluster.push(action.clone());
    }
    close_cluster(&mut cluster, config, identity, &mut patterns);

    patterns
}

fn close_cluster(
    cluster: &mut Vec<Action>,
    config: &MiningConfig,
    identity: PatternIdentity,
    out: &mut Vec<Pattern>,
) {
    let members = std::mem::take(cluster);
    if members.len() < config.min_cluster_size {
        return;
    }
    out.push(
        Pattern::new(
            assign_id(identity, TEMPORAL_CLUSTER_NAME),
            TEMPORAL_CLUSTER_NAME,
            members.len() as u64,
            config.temporal_confidence,
        )
        .with_actions(members)
        .with_heuristic(HeuristicLabel::TemporalProximity),
    );
}
