//! Response shape and parsing errors.

use thiserror::Error;

/// Errors raised when a successful response cannot be decoded.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The body was declared as JSON but did not decode into the expected type.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The body decoded, but its shape is not one the endpoint understands.
    #[error("Unexpected response format from {endpoint}")]
    UnexpectedFormat {
        /// The endpoint path that produced the response.
        endpoint: String,
    },
}

impl ValidationError {
    /// Creates an unexpected format error for the given endpoint.
    pub fn unexpected_format(endpoint: impl Into<String>) -> Self {
        Self::UnexpectedFormat {
            endpoint: endpoint.into(),
        }
    }

    /// Returns the endpoint named by the error, if any.
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::UnexpectedFormat { endpoint } => Some(endpoint),
            Self::JsonParse(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_format_names_endpoint() {
        let err = ValidationError::unexpected_format("/api/models");
        assert_eq!(err.to_string(), "Unexpected response format from /api/models");
        assert_eq!(err.endpoint(), Some("/api/models"));
    }

    #[test]
    fn test_json_parse_has_no_endpoint() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(err.to_string().starts_with("JSON parse error"));
        assert_eq!(err.endpoint(), None);
    }
}
