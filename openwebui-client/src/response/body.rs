//! Decoded response bodies.

use crate::error::ValidationError;

/// Decoded body of a successful response.
///
/// The variant is chosen by the response `Content-Type`: JSON content is
/// parsed into `T`, anything else is kept as text without inspection.
///
/// ## Examples
///
/// ```rust
/// use openwebui_client::ResponseBody;
///
/// let body: ResponseBody<u32> = ResponseBody::Json(7);
/// assert_eq!(body.as_json(), Some(&7));
///
/// let text: ResponseBody<u32> = ResponseBody::Text("ok".to_string());
/// assert_eq!(text.as_text(), Some("ok"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody<T> {
    /// Parsed JSON response.
    Json(T),
    /// Raw text response.
    Text(String),
}

impl<T> ResponseBody<T> {
    /// Returns `true` if the body was parsed as JSON.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json(_))
    }

    /// Returns `true` if the body was kept as text.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// Attempt to get the JSON value, returning `None` for text.
    pub fn as_json(&self) -> Option<&T> {
        match self {
            Self::Json(v) => Some(v),
            Self::Text(_) => None,
        }
    }

    /// Attempt to get the text, returning `None` for JSON.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Json(_) => None,
        }
    }

    /// Convert into the JSON value, returning `Err(self)` for text.
    pub fn into_json(self) -> Result<T, Self> {
        match self {
            Self::Json(v) => Ok(v),
            other => Err(other),
        }
    }

    /// Convert into the JSON value an endpoint requires.
    ///
    /// ## Errors
    ///
    /// Returns [`ValidationError::UnexpectedFormat`] naming `endpoint` when
    /// the server answered with a non-JSON body.
    pub fn into_json_for(self, endpoint: &str) -> Result<T, ValidationError> {
        self.into_json()
            .map_err(|_| ValidationError::unexpected_format(endpoint))
    }

    /// Maps the JSON value, leaving text untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ResponseBody<U> {
        match self {
            Self::Json(v) => ResponseBody::Json(f(v)),
            Self::Text(s) => ResponseBody::Text(s),
        }
    }
}
