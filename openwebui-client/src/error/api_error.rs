//! Top-level client error type.

use super::{ClientError, ConfigError, UnsupportedInputError, ValidationError};
use strum::Display;
use thiserror::Error;

/// Top-level error type for all client operations.
///
/// This enum aggregates all error categories, enabling unified error handling
/// while preserving the ability to match on specific error types when needed.
///
/// ## Examples
///
/// ```rust,ignore
/// use openwebui_client::{ApiError, ErrorKind};
///
/// fn handle_error(err: ApiError) {
///     match err.kind() {
///         ErrorKind::Http => eprintln!("server said no: {err}"),
///         ErrorKind::Timeout => eprintln!("try a longer timeout: {err}"),
///         other => eprintln!("{other}: {err}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// Invalid client configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// HTTP status, timeout and transport errors.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Successful response whose body could not be decoded.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Caller input the client cannot serialize.
    #[error(transparent)]
    Unsupported(#[from] UnsupportedInputError),
}

/// Closed classification of every failure the client can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// Missing or malformed configuration.
    Configuration,
    /// The configured timeout elapsed.
    Timeout,
    /// The server answered with a non-success status.
    Http,
    /// The response body did not have the expected shape.
    Format,
    /// The network layer failed.
    Transport,
    /// The caller supplied an input the client cannot serialize.
    UnsupportedInput,
}

impl ApiError {
    /// Returns the classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) => ErrorKind::Configuration,
            Self::Client(ClientError::Timeout { .. }) => ErrorKind::Timeout,
            Self::Client(ClientError::HttpStatus { .. }) => ErrorKind::Http,
            Self::Client(ClientError::Request(_) | ClientError::Connection(_)) => {
                ErrorKind::Transport
            }
            Self::Validation(_) => ErrorKind::Format,
            Self::Unsupported(_) => ErrorKind::UnsupportedInput,
        }
    }

    /// Returns the HTTP status code, if the server answered with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if repeating the call could plausibly succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Client(e) => e.is_retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_client_error() {
        let api_err: ApiError = ClientError::Timeout { duration_ms: 5000 }.into();
        assert_eq!(api_err.kind(), ErrorKind::Timeout);
        assert!(api_err.to_string().contains("5000"));
    }

    #[test]
    fn test_http_kind_and_status() {
        let api_err: ApiError = ClientError::HttpStatus {
            status: 404,
            message: "Not Found".to_string(),
        }
        .into();
        assert_eq!(api_err.kind(), ErrorKind::Http);
        assert_eq!(api_err.status_code(), Some(404));
        assert!(!api_err.is_retryable());
    }

    #[test]
    fn test_connection_is_transport() {
        let api_err: ApiError = ClientError::Connection("refused".to_string()).into();
        assert_eq!(api_err.kind(), ErrorKind::Transport);
        assert!(api_err.is_retryable());
    }

    #[test]
    fn test_config_and_validation_kinds() {
        let config: ApiError = ConfigError::missing_field("api_key").into();
        assert_eq!(config.kind(), ErrorKind::Configuration);

        let format: ApiError = ValidationError::unexpected_format("/api/models").into();
        assert_eq!(format.kind(), ErrorKind::Format);
        assert!(format.to_string().contains("/api/models"));
    }

    #[test]
    fn test_unsupported_kind_is_not_retryable() {
        let err: ApiError = UnsupportedInputError::InvalidMime {
            mime: "nope".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UnsupportedInput);
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::UnsupportedInput.to_string(), "UnsupportedInput");
    }
}
