//! Request execution with tracing instrumentation.
//!
//! This module provides the [`OpenWebUiClient`] struct, which turns a
//! [`RequestSpec`] into one authenticated HTTP exchange and classifies the
//! outcome.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn, Span};

use crate::config::ClientConfig;
use crate::error::{ApiError, ClientError, UnsupportedInputError, ValidationError};
use crate::method::RestMethod;
use crate::request::RequestSpec;
use crate::response::ResponseBody;
use crate::transport::{
    HttpTransport, MultipartFile, ReqwestTransport, TransportBody, TransportRequest,
    TransportResponse,
};

/// Async client for the Open WebUI REST API.
///
/// The client holds only its immutable configuration and a shared transport,
/// so it is cheap to clone and safe to use from many tasks at once. Every
/// call gets its own timeout.
///
/// ## Examples
///
/// ```rust,ignore
/// use openwebui_client::{ClientConfig, OpenWebUiClient, RequestSpec};
///
/// let config = ClientConfig::new("http://localhost:3000", "sk-xxx")?;
/// let client = OpenWebUiClient::new(config)?;
///
/// let models = client.list_models().await?;
/// println!("{} models available", models.len());
///
/// // Any endpoint, through the escape hatch
/// let configs = client
///     .execute::<serde_json::Value, _>(RequestSpec::get("/api/v1/configs"))
///     .await?;
/// ```
#[derive(Debug, Clone)]
pub struct OpenWebUiClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl OpenWebUiClient {
    /// Creates a client backed by [`ReqwestTransport`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a client that sends every request through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Creates a client from `OPENWEBUI_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if the configuration is incomplete or the HTTP
    /// client cannot be constructed.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Executes a request and decodes the response.
    ///
    /// The body is serialized as JSON unless the method is GET, in which
    /// case it is ignored. `Authorization: Bearer <key>` and
    /// `Content-Type: application/json` are always sent unless the request
    /// names the same header with a different value.
    ///
    /// A JSON response is parsed into `T`; any other content type is
    /// returned as text.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - The body cannot be serialized or a header is invalid
    /// - The call exceeds the configured timeout
    /// - The transport fails
    /// - The server returns a non-success status code
    /// - A JSON response does not decode into `T`
    #[instrument(
        name = "openwebui_request",
        skip(self, spec),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn execute<T, B>(&self, spec: RequestSpec<B>) -> Result<ResponseBody<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let method = spec.method();
        let body = match spec.body() {
            Some(body) if method.sends_body() => TransportBody::Json(
                serde_json::to_vec(body).map_err(UnsupportedInputError::Serialization)?,
            ),
            _ => TransportBody::Empty,
        };

        let mut headers = self.default_headers(CONTENT_TYPE, "application/json")?;
        merge_headers(&mut headers, spec.headers())?;

        let response = self
            .dispatch(TransportRequest {
                method,
                url: self.config.url_for(spec.path()),
                headers,
                body,
            })
            .await?;

        decode(response)
    }

    /// Uploads a single file as `multipart/form-data`.
    ///
    /// `Content-Type` is left to the transport so the multipart boundary is
    /// set correctly; `Accept: application/json` is sent instead.
    #[instrument(
        name = "openwebui_request",
        skip(self, file),
        fields(
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn execute_multipart<T>(
        &self,
        path: &str,
        file: MultipartFile,
    ) -> Result<ResponseBody<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let headers = self.default_headers(ACCEPT, "application/json")?;

        let response = self
            .dispatch(TransportRequest {
                method: RestMethod::Post,
                url: self.config.url_for(path),
                headers,
                body: TransportBody::Multipart(file),
            })
            .await?;

        decode(response)
    }

    /// Sends a request under the configured timeout and rejects non-success
    /// statuses.
    async fn dispatch(&self, request: TransportRequest) -> Result<TransportResponse, ApiError> {
        let span = Span::current();
        span.record("http.method", request.method.to_string().as_str());
        span.record("http.url", request.url.as_str());

        debug!(method = %request.method, url = %request.url, "Sending request");

        let timeout_ms = self.config.timeout_ms();
        let response = tokio::time::timeout(self.config.timeout(), self.transport.send(request))
            .await
            .map_err(|_| {
                warn!(timeout_ms, "Request timed out");
                span.record("otel.status_code", "ERROR");
                ClientError::Timeout {
                    duration_ms: timeout_ms,
                }
            })??;

        let status = response.status;
        span.record("http.status_code", status);

        if !response.is_success() {
            let message = response.text();
            let otel_status = if status >= 500 { "ERROR" } else { "UNSET" };
            span.record("otel.status_code", otel_status);
            warn!(
                status,
                body = log_excerpt(&message),
                body_bytes = message.len(),
                "API returned error status"
            );

            return Err(ClientError::HttpStatus { status, message }.into());
        }

        span.record("otel.status_code", "OK");
        debug!(
            status,
            content_type = response.content_type().unwrap_or_default(),
            bytes = response.body.len(),
            "Received response"
        );

        Ok(response)
    }

    /// Builds the bearer header plus one content negotiation header.
    fn default_headers(
        &self,
        name: HeaderName,
        value: &'static str,
    ) -> Result<HeaderMap, ApiError> {
        let bearer = HeaderValue::try_from(format!("Bearer {}", self.config.api_key())).map_err(
            |e| UnsupportedInputError::InvalidHeader {
                name: AUTHORIZATION.as_str().to_string(),
                reason: e.to_string(),
            },
        )?;

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(name, HeaderValue::from_static(value));
        Ok(headers)
    }
}

/// Merges caller headers over the defaults, key by key.
fn merge_headers(headers: &mut HeaderMap, extra: &[(String, String)]) -> Result<(), ApiError> {
    for (name, value) in extra {
        let header_name =
            HeaderName::try_from(name.as_str()).map_err(|e| UnsupportedInputError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        let header_value =
            HeaderValue::try_from(value.as_str()).map_err(|e| UnsupportedInputError::InvalidHeader {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        headers.insert(header_name, header_value);
    }
    Ok(())
}

/// Longest error body prefix written to the log, in characters.
const LOG_BODY_LIMIT: usize = 512;

/// Cuts `body` to [`LOG_BODY_LIMIT`] characters on a char boundary.
fn log_excerpt(body: &str) -> &str {
    match body.char_indices().nth(LOG_BODY_LIMIT) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}

/// Decodes a successful response according to its content type.
fn decode<T: DeserializeOwned>(response: TransportResponse) -> Result<ResponseBody<T>, ApiError> {
    if response.is_json() {
        let parsed = serde_json::from_slice(&response.body).map_err(ValidationError::JsonParse)?;
        Ok(ResponseBody::Json(parsed))
    } else {
        Ok(ResponseBody::Text(response.text()))
    }
}
