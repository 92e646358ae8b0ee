//! Per-call request descriptions.

use crate::method::RestMethod;

/// Describes a single call to the API.
///
/// The path is appended to the configured base URL verbatim and must start
/// with `/`. The body is only serialized when the method is not GET.
///
/// ## Examples
///
/// ```rust
/// use openwebui_client::{RequestSpec, RestMethod};
///
/// let spec = RequestSpec::post("/api/chats")
///     .with_body(serde_json::json!({ "chat": { "title": "hello" } }))
///     .with_header("X-Request-Id", "42");
///
/// assert_eq!(spec.method(), RestMethod::Post);
/// assert_eq!(spec.path(), "/api/chats");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec<B = serde_json::Value> {
    method: RestMethod,
    path: String,
    body: Option<B>,
    headers: Vec<(String, String)>,
}

impl RequestSpec {
    /// Creates a request without a body.
    pub fn new(method: RestMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            headers: Vec::new(),
        }
    }

    /// Creates a GET request.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Get, path)
    }

    /// Creates a POST request.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Post, path)
    }

    /// Creates a PUT request.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Put, path)
    }

    /// Creates a PATCH request.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Patch, path)
    }

    /// Creates a DELETE request.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(RestMethod::Delete, path)
    }
}

impl<B> RequestSpec<B> {
    /// Attaches a body, replacing any previous one.
    #[must_use]
    pub fn with_body<T>(self, body: T) -> RequestSpec<T> {
        RequestSpec {
            method: self.method,
            path: self.path,
            body: Some(body),
            headers: self.headers,
        }
    }

    /// Adds an extra header.
    ///
    /// Extra headers override the defaults (`Authorization`, `Content-Type`)
    /// key by key; defaults that are not named here are kept.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// The HTTP method.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// The request path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The body, if one was attached.
    pub fn body(&self) -> Option<&B> {
        self.body.as_ref()
    }

    /// The extra headers, in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

/// Percent-encodes a value for use as a single path segment.
pub(crate) fn path_segment(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_method_is_get() {
        let spec = RequestSpec::new(RestMethod::default(), "/health");
        assert_eq!(spec.method(), RestMethod::Get);
        assert!(spec.body().is_none());
        assert!(spec.headers().is_empty());
    }

    #[test]
    fn test_with_body_keeps_method_path_and_headers() {
        #[derive(Debug, PartialEq)]
        struct Payload {
            n: u8,
        }

        let spec = RequestSpec::patch("/api/chats/1")
            .with_header("X-Trace", "abc")
            .with_body(Payload { n: 7 });

        assert_eq!(spec.method(), RestMethod::Patch);
        assert_eq!(spec.path(), "/api/chats/1");
        assert_eq!(spec.body(), Some(&Payload { n: 7 }));
        assert_eq!(spec.headers(), &[("X-Trace".to_string(), "abc".to_string())]);
    }

    #[test]
    fn test_path_segment_encoding() {
        assert_eq!(path_segment("abc-123"), "abc-123");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }
}
