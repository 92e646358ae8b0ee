//! Client configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These are raised while building a [`ClientConfig`](crate::ClientConfig),
/// before any network activity takes place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required configuration field is missing or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// The base URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The timeout value could not be parsed.
    #[error("Invalid timeout: {value}")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
