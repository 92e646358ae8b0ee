//! Typed async client for the Open WebUI REST API.
//!
//! The `openwebui-client` crate turns method calls into authenticated HTTP
//! requests against an Open WebUI server, normalizes the response shapes the
//! server is known to vary between, and reports failures through one closed
//! error model.
//!
//! ## Features
//!
//! - **Typed endpoints**: models, chat completions, conversations, users,
//!   functions, file upload and knowledge collections
//! - **Local-inference proxy**: `/ollama/api/*` generate, embed and tags
//! - **Escape hatch**: [`OpenWebUiClient::execute`] for any other route
//! - **Per-call timeout**: covers the whole exchange, body included
//! - **Closed error classification**: [`ApiError::kind`] returns an
//!   [`ErrorKind`] to branch on instead of matching messages
//! - **Injectable transport**: swap [`ReqwestTransport`] for any
//!   [`HttpTransport`]
//!
//! ## Example
//!
//! ```rust,ignore
//! use openwebui_client::{ClientConfig, ErrorKind, OpenWebUiClient};
//!
//! let config = ClientConfig::new("http://localhost:3000/", "sk-xxx")?.with_timeout_ms(10_000);
//! let client = OpenWebUiClient::new(config)?;
//!
//! match client.list_models().await {
//!     Ok(models) => println!("{} models", models.len()),
//!     Err(e) if e.kind() == ErrorKind::Timeout => eprintln!("server too slow: {e}"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod method;
pub mod request;
pub mod response;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::OpenWebUiClient;
pub use config::ClientConfig;
pub use error::{
    ApiError, ClientError, ConfigError, ErrorKind, UnsupportedInputError, ValidationError,
};
pub use method::RestMethod;
pub use request::RequestSpec;
pub use response::ResponseBody;
pub use transport::{HttpTransport, ReqwestTransport};
