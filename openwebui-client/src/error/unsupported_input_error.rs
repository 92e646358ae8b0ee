//! Errors for caller inputs that cannot be put on the wire.

use thiserror::Error;

/// The caller supplied something this client cannot serialize.
///
/// These are raised before the transport is invoked and are never retryable.
#[derive(Debug, Error)]
pub enum UnsupportedInputError {
    /// The request body could not be serialized as JSON.
    #[error("Request body cannot be serialized: {0}")]
    Serialization(#[source] serde_json::Error),

    /// A caller-supplied header name or value is not valid HTTP.
    #[error("Invalid header '{name}': {reason}")]
    InvalidHeader {
        /// The offending header name.
        name: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The MIME type given for an upload is not a valid media type.
    #[error("Invalid MIME type '{mime}'")]
    InvalidMime {
        /// The rejected MIME string.
        mime: String,
    },
}
