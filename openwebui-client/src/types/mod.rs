//! Request and response types for the known endpoints.
//!
//! Every response type keeps unrecognized fields in an `extra` map, so
//! server additions survive a decode.

mod chat;
mod completion;
mod file;
mod model;
mod user;

pub use chat::{Chat, ChatSummary, NewChat};
pub use completion::{
    ChatCompletion, ChatCompletionRequest, ChatMessage, ChatRole, Choice, FileReference,
    FileReferenceKind,
};
pub use file::{FileObject, FileUpload, KnowledgeFileRequest};
pub use model::Model;
pub use user::User;

/// Unrecognized JSON fields.
pub type Extra = serde_json::Map<String, serde_json::Value>;
