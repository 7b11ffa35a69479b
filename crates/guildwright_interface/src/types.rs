//! Data exchanged with the transport collaborator.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Raw guild object returned by the transport after creation.
///
/// # Examples
///
/// ```
/// use guildwright_interface::RawGuildData;
/// use serde_json::json;
///
/// let data = RawGuildData::new(json!({"id": "81384788765712384", "name": "Test"}));
/// assert_eq!(data.id(), Some("81384788765712384"));
/// assert_eq!(data.name(), Some("Test"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawGuildData(JsonValue);

impl RawGuildData {
    /// Wrap a JSON guild object.
    pub fn new(value: JsonValue) -> Self {
        Self(value)
    }

    /// Server-assigned snowflake, if present.
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(JsonValue::as_str)
    }

    /// Guild name, if present.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(JsonValue::as_str)
    }

    /// Borrow the underlying JSON.
    pub fn as_json(&self) -> &JsonValue {
        &self.0
    }

    /// Take the underlying JSON.
    pub fn into_inner(self) -> JsonValue {
        self.0
    }
}

impl From<JsonValue> for RawGuildData {
    fn from(value: JsonValue) -> Self {
        Self(value)
    }
}
