//! Stored conversation types.

use serde::{Deserialize, Serialize};

use super::Extra;

/// Entry returned by `GET /api/chats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSummary {
    /// Conversation id.
    pub id: String,
    /// Conversation title.
    #[serde(default)]
    pub title: String,
    /// Last update as a Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// Creation as a Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Any other fields the server returned.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A stored conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    /// Conversation id.
    pub id: String,
    /// Owner id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Conversation title.
    #[serde(default)]
    pub title: String,
    /// Conversation content (messages, history, models), kept as sent by the server.
    #[serde(default)]
    pub chat: serde_json::Value,
    /// Last update as a Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// Creation as a Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Any other fields the server returned.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body for creating or updating a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChat {
    /// Conversation content.
    pub chat: serde_json::Value,
}

impl NewChat {
    /// Wraps conversation content.
    pub fn new(chat: serde_json::Value) -> Self {
        Self { chat }
    }
}
