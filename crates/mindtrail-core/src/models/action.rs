use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::{MindtrailError, MindtrailResult};

/// One discrete, timestamped user interaction.
///
/// The timestamp is supplied by the producer (milliseconds since epoch), not
/// taken from the wall clock at ingestion. Unknown fields are ignored on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Action {
    pub timestamp: i64,
    #[serde(alias = "actionType", alias = "type")]
    pub action_type: String,
    /// Opaque element identifier, may be empty.
    #[serde(default, alias = "elementId")]
    pub element_id: String,
    /// Opaque key/value context; never inspected by the engine.
    #[serde(default)]
    pub context: HashMap<String, serde_json::Value>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub sequence: Option<u64>,
}

impl Action {
    pub fn new(action_type: impl Into<String>, timestamp: i64) -> Self {
        Self {
            timestamp,
            action_type: action_type.into(),
            element_id: String::new(),
            context: HashMap::new(),
            duration: None,
            sequence: None,
        }
    }

    pub fn with_element(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = element_id.into();
        self
    }

    pub fn with_context(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.context.insert(key.into(), value);
        self
    }

    pub fn with_duration(mut self, duration: u64) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_sequence(mut self, sequence: u64) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Basic shape validation performed at the boundary before ingestion.
    pub fn validate(&self) -> MindtrailResult<()> {
        if self.action_type.trim().is_empty() {
            return Err(MindtrailError::InvalidAction {
                reason: "action_type is empty".to_string(),
            });
        }
        if self.timestamp < 0 {
            return Err(MindtrailError::InvalidAction {
                reason: format!("timestamp {} is negative", self.timestamp),
            });
        }
        Ok(())
    }

    /// Parse and validate an action from a raw JSON record.
    pub fn from_json(value: serde_json::Value) -> MindtrailResult<Self> {
        let action: Self = serde_json::from_value(value)?;
        action.validate()?;
        Ok(action)
    }
}
