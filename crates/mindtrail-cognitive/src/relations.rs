//! Fixed synonym groups used by the anchoring detector.

/// Select-like, scroll-like, input-like, commit-like, cancel-like, and
/// undo-like actions.
pub const RELATION_GROUPS: [&[&str]; 6] = [
    &["click", "select", "choose", "pick", "tap"],
    &["scroll", "swipe", "pan"],
    &["input", "type", "enter", "edit"],
    &["submit", "confirm", "save", "apply"],
    &["cancel", "close", "exit", "dismiss"],
    &["undo", "revert", "restore"],
];

/// Two action types are related if identical or members of the same group.
pub fn are_related(a: &str, b: &str) -> bool {
    a == b
        || RELATION_GROUPS
            .iter()
            .any(|group| group.contains(&a) && group.contains(&b))
}
