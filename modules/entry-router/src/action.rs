//! The action message type.

use serde::{Deserialize, Serialize};

/// A `{ type, payload }` message flowing through the dispatch pipeline.
///
/// The payload is never inspected by the router or the store; entries and
/// reducers interpret it. Extra fields are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action<P> {
    #[serde(rename = "type")]
    pub action_type: String,
    pub payload: P,
}

impl<P> Action<P> {
    pub fn new(action_type: impl Into<String>, payload: P) -> Self {
        Self {
            action_type: action_type.into(),
            payload,
        }
    }

    pub fn action_type(&self) -> &str {
        &self.action_type
    }

    pub fn is(&self, action_type: &str) -> bool {
        self.action_type == action_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn deserializes_type_field_and_ignores_extras() {
        let action: Action<Value> = serde_json::from_value(json!({
            "type": "SET",
            "payload": { "a": 1 },
            "meta": { "source": "ui" }
        }))
        .unwrap();

        assert_eq!(action.action_type(), "SET");
        assert_eq!(action.payload, json!({ "a": 1 }));
    }

    #[test]
    fn serializes_with_type_key() {
        let value = serde_json::to_value(Action::new("PING", 3)).unwrap();
        assert_eq!(value, json!({ "type": "PING", "payload": 3 }));
    }
}
