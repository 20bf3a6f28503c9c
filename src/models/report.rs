use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Result of scanning a pull-request body for switches
///
/// Serialized as `{"hasChanged": .., "state": {..}, "captures": {..}}`, where
/// `captures` is omitted entirely unless label capture was requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// At least one switch has a checkbox that differs from its marker
    pub has_changed: bool,

    /// Visible state per switch id (last occurrence wins)
    pub state: BTreeMap<String, bool>,

    /// Label per switch id (last occurrence wins), only when capturing labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captures: Option<BTreeMap<String, String>>,
}

impl Report {
    /// Compact JSON, as published in the `report` action output
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
