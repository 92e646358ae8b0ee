//! Chat completion request and response types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::Extra;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    /// System instructions.
    System,
    /// End user.
    User,
    /// Model output.
    Assistant,
    /// Tool result.
    Tool,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message author.
    pub role: ChatRole,
    /// Message text. Backends send `null` on tool-call turns.
    #[serde(default)]
    pub content: Option<String>,
    /// Any other message fields (`tool_calls`, `name`, ...).
    #[serde(flatten)]
    pub extra: Extra,
}

impl ChatMessage {
    /// Creates a message.
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            extra: Extra::new(),
        }
    }

    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Kind of document reference attached to a completion for RAG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileReferenceKind {
    /// A single uploaded file.
    File,
    /// A knowledge collection.
    Collection,
}

/// Reference to previously uploaded content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReference {
    /// What the id points at.
    #[serde(rename = "type")]
    pub kind: FileReferenceKind,
    /// File or collection id.
    pub id: String,
}

impl FileReference {
    /// References a single uploaded file.
    pub fn file(id: impl Into<String>) -> Self {
        Self {
            kind: FileReferenceKind::File,
            id: id.into(),
        }
    }

    /// References a knowledge collection.
    pub fn collection(id: impl Into<String>) -> Self {
        Self {
            kind: FileReferenceKind::Collection,
            id: id.into(),
        }
    }
}

/// Body of `POST /api/chat/completions`.
///
/// ## Examples
///
/// ```rust
/// use openwebui_client::types::{ChatCompletionRequest, ChatMessage, FileReference};
///
/// let request = ChatCompletionRequest::new("llama3", vec![ChatMessage::user("Summarize")])
///     .with_files(vec![FileReference::file("file-123")])
///     .with_option("temperature", 0.2);
///
/// let body = serde_json::to_value(&request).unwrap();
/// assert_eq!(body["files"][0]["type"], "file");
/// assert_eq!(body["temperature"], 0.2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model id.
    pub model: String,
    /// Conversation so far.
    pub messages: Vec<ChatMessage>,
    /// Documents to retrieve from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<FileReference>>,
    /// Additional request options (`temperature`, `max_tokens`, ...).
    #[serde(flatten)]
    pub extra: Extra,
}

impl ChatCompletionRequest {
    /// Creates a request without attached files.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            files: None,
            extra: Extra::new(),
        }
    }

    /// Attaches documents for retrieval-augmented generation.
    #[must_use]
    pub fn with_files(mut self, files: Vec<FileReference>) -> Self {
        self.files = Some(files);
        self
    }

    /// Sets an additional top-level request option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// One completion candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Position in the `choices` array.
    #[serde(default)]
    pub index: u32,
    /// Generated message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ChatMessage>,
    /// Why generation stopped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Response of `POST /api/chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletion {
    /// Completion id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Model that produced the completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Completion candidates.
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token accounting, as reported by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<serde_json::Value>,
    /// Any other fields the server returned.
    #[serde(flatten)]
    pub extra: Extra,
}

impl ChatCompletion {
    /// Text of the first choice, if there is one.
    pub fn first_content(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_without_files_omits_field() {
        let request = ChatCompletionRequest::new("m1", vec![ChatMessage::user("hi")]);
        let body = serde_json::to_value(&request).unwrap();
        assert!(body.get("files").is_none());
        assert_eq!(body["messages"][0]["role"], "user");
    }

    #[test]
    fn test_collection_reference_serializes_type() {
        let reference = FileReference::collection("kb-1");
        assert_eq!(
            serde_json::to_value(&reference).unwrap(),
            json!({ "type": "collection", "id": "kb-1" })
        );
    }

    #[test]
    fn test_completion_first_content() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-1",
            "model": "m1",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "Hello!" }, "finish_reason": "stop" }
            ],
            "usage": { "total_tokens": 12 }
        }))
        .unwrap();

        assert_eq!(completion.first_content(), Some("Hello!"));
        assert_eq!(completion.choices[0].finish_reason.as_deref(), Some("stop"));
    }

    #[test]
    fn test_tool_call_message_with_null_content() {
        let completion: ChatCompletion = serde_json::from_value(json!({
            "id": "chatcmpl-2",
            "model": "m1",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": { "name": "lookup", "arguments": "{\"q\":\"rust\"}" }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        }))
        .unwrap();

        let message = completion.choices[0].message.as_ref().unwrap();
        assert_eq!(message.content, None);
        assert_eq!(message.extra["tool_calls"][0]["function"]["name"], "lookup");
        assert_eq!(completion.first_content(), None);
    }

    #[test]
    fn test_message_constructors_send_content() {
        let body = serde_json::to_value(ChatMessage::system("Be brief")).unwrap();
        assert_eq!(body, json!({ "role": "system", "content": "Be brief" }));
    }

    #[test]
    fn test_completion_without_choices() {
        let completion: ChatCompletion = serde_json::from_value(json!({ "detail": "odd" })).unwrap();
        assert_eq!(completion.first_content(), None);
        assert!(completion.extra.contains_key("detail"));
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("assistant".parse::<ChatRole>().unwrap(), ChatRole::Assistant);
        assert_eq!(ChatRole::System.to_string(), "system");
    }
}
