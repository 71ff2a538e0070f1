//! Push-message value objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Routing identifier the Sdwire server plugin publishes under
pub const SDWIRE_PLUGIN_ID: &str = "sdwire";

/// Payload of one push message.
///
/// A loosely-typed key/value record: the Sdwire plugin sends `progress`
/// (integer percentage) and `error` (human-readable string), and may grow
/// more fields over time. Unknown fields are ignored, nothing is validated
/// beyond presence, and the payload is never mutated by consumers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PluginMessage(Map<String, Value>);

impl PluginMessage {
    /// Create an empty payload
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Upload progress percentage, if the payload carries an integer one
    pub fn progress(&self) -> Option<i64> {
        self.0.get("progress").and_then(Value::as_i64)
    }

    /// Error text, if the payload carries one
    pub fn error(&self) -> Option<&str> {
        self.0.get("error").and_then(Value::as_str)
    }

    /// Whether the payload has no fields at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One frame on the push channel: a payload addressed to a plugin.
///
/// Mirrors the host's plugin-message envelope; `data` may be omitted
/// entirely, in which case it decodes to an empty payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageFrame {
    /// Identifier of the plugin the payload is addressed to
    pub plugin: String,
    /// The payload itself
    #[serde(default)]
    pub data: PluginMessage,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(json: &str) -> PluginMessage {
        serde_json::from_str(json).expect("valid payload")
    }

    #[test]
    fn progress_field_is_read() {
        let msg = payload(r#"{"progress": 42}"#);
        assert_eq!(msg.progress(), Some(42));
        assert_eq!(msg.error(), None);
    }

    #[test]
    fn error_field_is_read() {
        let msg = payload(r#"{"error": "timeout"}"#);
        assert_eq!(msg.error(), Some("timeout"));
        assert_eq!(msg.progress(), None);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let msg = payload(r#"{"progress": 10, "speed": "fast", "retries": 3}"#);
        assert_eq!(msg.progress(), Some(10));
        assert_eq!(msg.error(), None);
    }

    #[test]
    fn non_integer_progress_is_treated_as_absent() {
        let msg = payload(r#"{"progress": "almost done"}"#);
        assert_eq!(msg.progress(), None);
    }

    #[test]
    fn non_string_error_is_treated_as_absent() {
        let msg = payload(r#"{"error": 500}"#);
        assert_eq!(msg.error(), None);
    }

    #[test]
    fn empty_payload() {
        let msg = PluginMessage::new();
        assert!(msg.is_empty());
        assert_eq!(msg.progress(), None);
        assert_eq!(msg.error(), None);
    }

    #[test]
    fn frame_decodes_with_payload() {
        let frame: MessageFrame =
            serde_json::from_str(r#"{"plugin": "sdwire", "data": {"progress": 7}}"#)
                .expect("valid frame");
        assert_eq!(frame.plugin, SDWIRE_PLUGIN_ID);
        assert_eq!(frame.data.progress(), Some(7));
    }

    #[test]
    fn frame_decodes_without_payload() {
        let frame: MessageFrame =
            serde_json::from_str(r#"{"plugin": "sdwire"}"#).expect("valid frame");
        assert!(frame.data.is_empty());
    }
}
