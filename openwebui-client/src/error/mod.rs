//! Layered error types for the Open WebUI client.
//!
//! The error hierarchy is structured for actionable diagnostics:
//! - [`ApiError`] - Top-level error type for all client operations
//! - [`ClientError`] - HTTP status, timeout and transport errors
//! - [`ValidationError`] - Response shape and parsing errors
//! - [`ConfigError`] - Client configuration errors
//! - [`UnsupportedInputError`] - Caller inputs the client cannot put on the wire
//!
//! [`ErrorKind`] flattens the hierarchy into a closed classification so
//! callers can branch exhaustively instead of inspecting messages.

mod api_error;
mod client_error;
mod config_error;
mod unsupported_input_error;
mod validation_error;

pub use api_error::{ApiError, ErrorKind};
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use unsupported_input_error::UnsupportedInputError;
pub use validation_error::ValidationError;
