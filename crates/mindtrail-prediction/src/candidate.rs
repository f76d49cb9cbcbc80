use serde::{Deserialize, Serialize};

/// A candidate next action with its accumulated score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictedAction {
    pub action_type: String,
    /// Sum of the confidences of every supporting pattern.
    pub score: f64,
    /// Names of the patterns that predicted this action, in store order.
    pub supporting_patterns: Vec<String>,
}

impl PredictedAction {
    pub(crate) fn new(action_type: &str) -> Self {
        Self {
            action_type: action_type.to_string(),
            score: 0.0,
            supporting_patterns: Vec::new(),
        }
    }

    pub(crate) fn support(&mut self, pattern_name: &str, confidence: f64) {
        self.score += confidence;
        self.supporting_patterns.push(pattern_name.to_string());
    }
}
