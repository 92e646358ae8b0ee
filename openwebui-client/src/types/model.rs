use serde::{Deserialize, Serialize};

use super::Extra;

/// A model available through the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model identifier, used as `model` in completion requests.
    pub id: String,
    /// Human-readable name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Owning backend (e.g. `ollama`, `openai`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owned_by: Option<String>,
    /// Creation time as a Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<i64>,
    /// Any other fields the server returned.
    #[serde(flatten)]
    pub extra: Extra,
}
