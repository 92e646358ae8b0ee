//! Endpoint-specific callers.
//!
//! Each method is a thin wrapper: it builds a [`RequestSpec`], hands it to
//! [`OpenWebUiClient::execute`] and normalizes the decoded body for its
//! endpoint. JSON of the wrong shape is reported as an unexpected format
//! naming the endpoint path.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::instrument;

use crate::client::OpenWebUiClient;
use crate::error::ApiError;
use crate::request::{path_segment, RequestSpec};
use crate::response::{decode_collection, decode_value, ResponseBody};
use crate::transport::MultipartFile;
use crate::types::{
    Chat, ChatCompletion, ChatCompletionRequest, ChatSummary, FileObject, FileUpload,
    KnowledgeFileRequest, Model, NewChat, User,
};

pub(crate) const MODELS: &str = "/api/models";
pub(crate) const CHAT_COMPLETIONS: &str = "/api/chat/completions";
pub(crate) const CHATS: &str = "/api/chats";
pub(crate) const CURRENT_USER: &str = "/api/users/me";
pub(crate) const HEALTH: &str = "/health";
pub(crate) const FUNCTIONS: &str = "/api/functions";
pub(crate) const FILES: &str = "/api/v1/files/";
pub(crate) const PROXY_GENERATE: &str = "/ollama/api/generate";
pub(crate) const PROXY_EMBED: &str = "/ollama/api/embed";
pub(crate) const PROXY_TAGS: &str = "/ollama/api/tags";

fn chat_path(id: &str) -> String {
    format!("{CHATS}/{}", path_segment(id))
}

fn knowledge_add_path(knowledge_id: &str) -> String {
    format!("/api/v1/knowledge/{}/file/add", path_segment(knowledge_id))
}

impl OpenWebUiClient {
    /// Lists the models available to the credential.
    ///
    /// The server answers either with a bare array or with `{"data": [...]}`;
    /// both decode to the same list.
    ///
    /// ## Errors
    ///
    /// Returns a format error naming `/api/models` for any other shape.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> Result<Vec<Model>, ApiError> {
        let value = self
            .execute::<Value, _>(RequestSpec::get(MODELS))
            .await?
            .into_json_for(MODELS)?;
        Ok(decode_collection(value, MODELS, "data")?)
    }

    /// Requests a chat completion.
    ///
    /// `files` on the request are sent as given, for retrieval-augmented
    /// generation over previously uploaded documents.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletion, ApiError> {
        self.fetch(RequestSpec::post(CHAT_COMPLETIONS).with_body(request), CHAT_COMPLETIONS)
            .await
    }

    /// Lists the stored conversations of the current user.
    #[instrument(skip(self))]
    pub async fn list_chats(&self) -> Result<Vec<ChatSummary>, ApiError> {
        let value = self
            .execute::<Value, _>(RequestSpec::get(CHATS))
            .await?
            .into_json_for(CHATS)?;
        Ok(decode_collection(value, CHATS, "data")?)
    }

    /// Fetches one conversation.
    #[instrument(skip(self))]
    pub async fn get_chat(&self, id: &str) -> Result<Chat, ApiError> {
        let path = chat_path(id);
        self.fetch(RequestSpec::get(path.as_str()), &path).await
    }

    /// Creates a conversation.
    #[instrument(skip(self, chat))]
    pub async fn create_chat(&self, chat: &NewChat) -> Result<Chat, ApiError> {
        self.fetch(RequestSpec::post(CHATS).with_body(chat), CHATS)
            .await
    }

    /// Updates a conversation.
    #[instrument(skip(self, chat))]
    pub async fn update_chat(&self, id: &str, chat: &NewChat) -> Result<Chat, ApiError> {
        let path = chat_path(id);
        self.fetch(RequestSpec::patch(path.as_str()).with_body(chat), &path)
            .await
    }

    /// Deletes a conversation, returning whatever the server acknowledged with.
    #[instrument(skip(self))]
    pub async fn delete_chat(&self, id: &str) -> Result<Value, ApiError> {
        let path = chat_path(id);
        let acknowledged = self
            .execute(RequestSpec::delete(path.as_str()))
            .await?
            .into_json_for(&path)?;
        Ok(acknowledged)
    }

    /// Returns the account the credential belongs to.
    #[instrument(skip(self))]
    pub async fn get_current_user(&self) -> Result<User, ApiError> {
        self.fetch(RequestSpec::get(CURRENT_USER), CURRENT_USER).await
    }

    /// Checks server health.
    ///
    /// Kept as a [`ResponseBody`] because deployments answer with either JSON
    /// or plain text.
    #[instrument(skip(self))]
    pub async fn health(&self) -> Result<ResponseBody<Value>, ApiError> {
        self.execute(RequestSpec::get(HEALTH)).await
    }

    /// Lists the functions (filters, actions, pipes) installed on the server.
    #[instrument(skip(self))]
    pub async fn list_functions(&self) -> Result<Vec<Value>, ApiError> {
        let value = self
            .execute::<Value, _>(RequestSpec::get(FUNCTIONS))
            .await?
            .into_json_for(FUNCTIONS)?;
        Ok(decode_collection(value, FUNCTIONS, "data")?)
    }

    /// Uploads a file for later retrieval.
    ///
    /// The returned [`FileObject::id`] can be attached to completions with
    /// [`FileReference::file`](crate::types::FileReference::file) or added to
    /// a knowledge collection.
    #[instrument(skip(self, upload), fields(file_name = upload.file_name(), bytes = upload.len() as u64))]
    pub async fn upload_file(&self, upload: FileUpload) -> Result<FileObject, ApiError> {
        let (file_name, content, mime_type) = upload.into_parts();
        let file = MultipartFile {
            field: "file".to_string(),
            file_name,
            mime_type,
            content,
        };

        let value = self
            .execute_multipart::<Value>(FILES, file)
            .await?
            .into_json_for(FILES)?;
        Ok(decode_value(value, FILES)?)
    }

    /// Adds an uploaded file to a knowledge collection.
    #[instrument(skip(self))]
    pub async fn add_file_to_knowledge(
        &self,
        knowledge_id: &str,
        file_id: &str,
    ) -> Result<Value, ApiError> {
        let path = knowledge_add_path(knowledge_id);
        let body = KnowledgeFileRequest {
            file_id: file_id.to_string(),
        };
        let knowledge = self
            .execute(RequestSpec::post(path.as_str()).with_body(&body))
            .await?
            .into_json_for(&path)?;
        Ok(knowledge)
    }

    /// Generates text through the local-inference proxy.
    #[instrument(skip(self, request))]
    pub async fn proxy_generate(&self, request: &Value) -> Result<Value, ApiError> {
        let generated = self
            .execute(RequestSpec::post(PROXY_GENERATE).with_body(request))
            .await?
            .into_json_for(PROXY_GENERATE)?;
        Ok(generated)
    }

    /// Computes embeddings through the local-inference proxy.
    #[instrument(skip(self, request))]
    pub async fn proxy_embed(&self, request: &Value) -> Result<Value, ApiError> {
        let embedded = self
            .execute(RequestSpec::post(PROXY_EMBED).with_body(request))
            .await?
            .into_json_for(PROXY_EMBED)?;
        Ok(embedded)
    }

    /// Lists the models known to the local-inference backend.
    ///
    /// Accepts a bare array or the backend's `{"models": [...]}` wrapper.
    #[instrument(skip(self))]
    pub async fn proxy_list_models(&self) -> Result<Vec<Value>, ApiError> {
        let value = self
            .execute::<Value, _>(RequestSpec::get(PROXY_TAGS))
            .await?
            .into_json_for(PROXY_TAGS)?;
        Ok(decode_collection(value, PROXY_TAGS, "models")?)
    }

    /// Executes `spec` and decodes the JSON body into the type `endpoint`
    /// returns.
    async fn fetch<T, B>(&self, spec: RequestSpec<B>, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let value = self
            .execute::<Value, _>(spec)
            .await?
            .into_json_for(endpoint)?;
        Ok(decode_value(value, endpoint)?)
    }
}
