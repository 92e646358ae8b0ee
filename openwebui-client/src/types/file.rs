//! File upload types.

use bytes::Bytes;
use serde::{Deserialize, Serialize};

use super::Extra;

/// An in-memory file to upload.
///
/// Only byte content is accepted; reading from the file system is left to
/// the caller.
///
/// ## Examples
///
/// ```rust
/// use openwebui_client::types::FileUpload;
///
/// let upload = FileUpload::new("notes.md", b"# Notes".to_vec()).with_mime_type("text/markdown");
/// assert_eq!(upload.file_name(), "notes.md");
/// assert_eq!(upload.len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    file_name: String,
    content: Bytes,
    mime_type: Option<String>,
}

impl FileUpload {
    /// Creates an upload from a file name and its content.
    pub fn new(file_name: impl Into<String>, content: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
            mime_type: None,
        }
    }

    /// Sets the MIME type of the part.
    #[must_use]
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// The file name reported to the server.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// The file content.
    pub fn content(&self) -> &Bytes {
        &self.content
    }

    /// The MIME type, if set.
    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Content length in bytes.
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` if the content is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub(crate) fn into_parts(self) -> (String, Bytes, Option<String>) {
        (self.file_name, self.content, self.mime_type)
    }
}

/// Metadata returned after an upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileObject {
    /// File id, used in [`FileReference`](super::FileReference) and knowledge calls.
    pub id: String,
    /// Stored file name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Owner id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Server-side metadata (content type, size, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<serde_json::Value>,
    /// Creation as a Unix timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    /// Any other fields the server returned.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Body of `POST /api/v1/knowledge/{id}/file/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeFileRequest {
    /// Id of a previously uploaded file.
    pub file_id: String,
}
