//! HTTP client module.
//!
//! [`OpenWebUiClient`] executes authenticated requests against the API and
//! exposes one method per known endpoint, plus
//! [`execute`](OpenWebUiClient::execute) for everything else.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use openwebui_client::{ClientConfig, OpenWebUiClient};
//! use openwebui_client::types::{ChatCompletionRequest, ChatMessage, FileReference};
//!
//! let client = OpenWebUiClient::new(ClientConfig::new("http://localhost:3000", "sk-xxx")?)?;
//!
//! let request = ChatCompletionRequest::new("llama3.1", vec![ChatMessage::user("Summarize the report")])
//!     .with_files(vec![FileReference::file("file-123")]);
//!
//! let completion = client.create_chat_completion(&request).await?;
//! println!("{}", completion.first_content().unwrap_or_default());
//! ```

mod endpoints;
mod executor;

pub use executor::OpenWebUiClient;
