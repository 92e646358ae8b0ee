//! HTTP transport abstraction.
//!
//! The executor never talks to `reqwest` directly. It hands a fully built
//! [`TransportRequest`] to an [`HttpTransport`] and gets back the complete
//! response. [`ReqwestTransport`] is the production implementation; tests
//! inject their own through
//! [`OpenWebUiClient::with_transport`](crate::OpenWebUiClient::with_transport).

use std::fmt;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

use crate::error::{ApiError, ClientError, UnsupportedInputError};
use crate::method::RestMethod;

/// A single file part of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartFile {
    /// Form field name.
    pub field: String,
    /// File name reported to the server.
    pub file_name: String,
    /// Optional MIME type of the part.
    pub mime_type: Option<String>,
    /// Raw file content.
    pub content: Bytes,
}

/// Request body as it goes on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportBody {
    /// No body.
    Empty,
    /// Serialized JSON text.
    Json(Vec<u8>),
    /// A multipart form with a single file part.
    Multipart(MultipartFile),
}

/// Fully resolved request handed to a transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method.
    pub method: RestMethod,
    /// Absolute URL.
    pub url: String,
    /// Final, merged headers.
    pub headers: HeaderMap,
    /// Body to send.
    pub body: TransportBody,
}

/// Complete response returned by a transport.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: HeaderMap,
    /// Entire response body.
    pub body: Bytes,
}

impl TransportResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The `Content-Type` header, if present and valid UTF-8.
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }

    /// Returns `true` if the content type declares JSON.
    ///
    /// Matches `application/json` as well as any `+json` structured suffix,
    /// ignoring parameters such as `charset`.
    pub fn is_json(&self) -> bool {
        let Some(content_type) = self.content_type() else {
            return false;
        };
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        essence == "application/json" || essence.ends_with("+json")
    }

    /// The body as text. Invalid UTF-8 sequences are replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends one HTTP request and returns the complete response.
///
/// Implementations must read the entire body before returning so that the
/// executor's timeout covers the whole exchange. They must not retry.
#[async_trait]
pub trait HttpTransport: Send + Sync + fmt::Debug {
    /// Sends the request.
    ///
    /// ## Errors
    ///
    /// Network failures are reported as [`ClientError`] variants and passed
    /// through by the executor without further wrapping.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiError>;
}

/// [`HttpTransport`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Creates a transport with a default `reqwest` client.
    ///
    /// No timeout is configured on the client itself; the executor enforces
    /// the per-call deadline.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new() -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(ClientError::Request)?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ApiError> {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), &request.url)
            .headers(request.headers);

        builder = match request.body {
            TransportBody::Empty => builder,
            TransportBody::Json(bytes) => builder.body(bytes),
            TransportBody::Multipart(file) => builder.multipart(multipart_form(file)?),
        };

        let response = builder.send().await.map_err(ClientError::Request)?;
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await.map_err(ClientError::Request)?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}

fn multipart_form(file: MultipartFile) -> Result<reqwest::multipart::Form, ApiError> {
    let mut part = reqwest::multipart::Part::bytes(file.content.to_vec()).file_name(file.file_name);
    if let Some(mime) = file.mime_type {
        part = part
            .mime_str(&mime)
            .map_err(|_| UnsupportedInputError::InvalidMime { mime })?;
    }
    Ok(reqwest::multipart::Form::new().part(file.field, part))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn response_with_type(content_type: &str) -> TransportResponse {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
        TransportResponse {
            status: 200,
            headers,
            body: Bytes::from_static(b"{}"),
        }
    }

    #[test]
    fn test_json_content_types() {
        assert!(response_with_type("application/json").is_json());
        assert!(response_with_type("application/json; charset=utf-8").is_json());
        assert!(response_with_type("Application/JSON").is_json());
        assert!(response_with_type("application/problem+json").is_json());
    }

    #[test]
    fn test_non_json_content_types() {
        assert!(!response_with_type("text/plain").is_json());
        assert!(!response_with_type("text/html; charset=utf-8").is_json());

        let missing = TransportResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        };
        assert!(!missing.is_json());
    }

    #[test]
    fn test_success_range() {
        let mut response = response_with_type("application/json");
        response.status = 204;
        assert!(response.is_success());
        response.status = 301;
        assert!(!response.is_success());
        response.status = 401;
        assert!(!response.is_success());
    }

    #[test]
    fn test_text_is_lossy() {
        let response = TransportResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: Bytes::from_static(&[b'o', b'k', 0xFF]),
        };
        assert!(response.text().starts_with("ok"));
    }

    #[test]
    fn test_invalid_mime_is_unsupported_input() {
        let file = MultipartFile {
            field: "file".to_string(),
            file_name: "notes.txt".to_string(),
            mime_type: Some("not a mime type".to_string()),
            content: Bytes::from_static(b"hello"),
        };
        let err = multipart_form(file).unwrap_err();
        assert!(matches!(
            err,
            ApiError::Unsupported(UnsupportedInputError::InvalidMime { .. })
        ));
    }
}
