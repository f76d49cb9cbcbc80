//! Test fixtures for Mindtrail: recorded session files and action builders
//! shared by the tests of every crate in the workspace.

use std::path::PathBuf;

use mindtrail_core::models::Action;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Timestamp used as the start of generated action streams.
pub const BASE_TIMESTAMP_MS: i64 = 1_700_000_000_000;

/// A recorded session: a short description plus its actions in order.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionFixture {
    pub description: String,
    pub actions: Vec<Action>,
}

/// Root directory of the fixture data shipped with this crate.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a recorded session by name, e.g. `"click_back_loop"`.
pub fn load_session(name: &str) -> SessionFixture {
    load_fixture(&format!("sessions/{name}.json"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// Build actions of the given types, `spacing_ms` apart, starting at
/// [`BASE_TIMESTAMP_MS`].
pub fn actions_from_types(types: &[&str], spacing_ms: i64) -> Vec<Action> {
    types
        .iter()
        .enumerate()
        .map(|(i, ty)| Action::new(*ty, BASE_TIMESTAMP_MS + i as i64 * spacing_ms))
        .collect()
}

/// Build one action per timestamp, all of the same type.
pub fn actions_at(action_type: &str, timestamps: &[i64]) -> Vec<Action> {
    timestamps
        .iter()
        .map(|ts| Action::new(action_type, *ts))
        .collect()
}

/// `count` actions where the first `dominant` are `dominant_type` and the
/// rest cycle through `others`.
pub fn dominated_actions(
    dominant_type: &str,
    dominant: usize,
    count: usize,
    others: &[&str],
) -> Vec<Action> {
    (0..count)
        .map(|i| {
            let ty = if i < dominant || others.is_empty() {
                dominant_type
            } else {
                others[(i - dominant) % others.len()]
            };
            Action::new(ty, BASE_TIMESTAMP_MS + i as i64 * 1000)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_session_files_exist() {
        let files = [
            "sessions/click_back_loop.json",
            "sessions/checkout_flow.json",
            "sessions/hesitant_editor.json",
        ];
        for f in &files {
            assert!(fixture_exists(f), "Missing fixture: {}", f);
        }
    }

    #[test]
    fn sessions_parse_into_actions() {
        let loop_session = load_session("click_back_loop");
        assert_eq!(loop_session.actions.len(), 12);
        assert_eq!(loop_session.actions[3].action_type, "back");

        let checkout = load_session("checkout_flow");
        assert_eq!(checkout.actions.len(), 15);
        assert_eq!(checkout.actions[1].element_id, "format-option");
        assert_eq!(checkout.actions[2].sequence, Some(2));
    }

    #[test]
    fn builders_space_timestamps() {
        let actions = actions_from_types(&["a", "b", "c"], 250);
        assert_eq!(actions[2].timestamp - actions[0].timestamp, 500);

        let dominated = dominated_actions("click", 7, 10, &["scroll"]);
        assert_eq!(
            dominated.iter().filter(|a| a.action_type == "click").count(),
            7
        );
    }
}
