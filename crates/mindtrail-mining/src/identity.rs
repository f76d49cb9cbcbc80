//! Pattern identity assignment at mining time.

use mindtrail_core::config::PatternIdentity;

/// Produce the store identity for a freshly mined pattern.
///
/// `Generated` yields a new UUID v4 on every call, so the same sequence mined
/// in two cycles lands in the store twice. `Name` uses the name itself.
pub fn assign_id(identity: PatternIdentity, name: &str) -> String {
    match identity {
        PatternIdentity::Generated => uuid::Uuid::new_v4().to_string(),
        PatternIdentity::Name => name.to_string(),
    }
}
