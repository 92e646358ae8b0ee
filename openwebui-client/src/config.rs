//! Client configuration.
//!
//! [`ClientConfig`] is validated once, at construction, and is immutable
//! afterwards. A config that exists is always usable.

use std::env;
use std::fmt;
use std::time::Duration;

use tracing::debug;
use url::Url;

use crate::error::ConfigError;

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Environment variable holding the base URL.
pub const ENV_BASE_URL: &str = "OPENWEBUI_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "OPENWEBUI_API_KEY";
/// Environment variable holding an optional timeout in milliseconds.
pub const ENV_TIMEOUT_MS: &str = "OPENWEBUI_TIMEOUT_MS";

/// Configuration for an [`OpenWebUiClient`](crate::OpenWebUiClient).
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use openwebui_client::ClientConfig;
///
/// let config = ClientConfig::new("http://localhost:3000/", "sk-test")
///     .unwrap()
///     .with_timeout(Duration::from_secs(60));
///
/// assert_eq!(config.base_url(), "http://localhost:3000");
/// assert_eq!(config.timeout_ms(), 60_000);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Creates a validated configuration with the default timeout.
    ///
    /// A single trailing slash is stripped from `base_url`, so request paths
    /// (which start with `/`) can be appended verbatim.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingField`] if either argument is empty and
    /// [`ConfigError::InvalidUrl`] if `base_url` is not an absolute URL.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let mut base_url = base_url.into();
        let api_key = api_key.into();

        if base_url.is_empty() {
            return Err(ConfigError::missing_field("base_url"));
        }
        if api_key.is_empty() {
            return Err(ConfigError::missing_field("api_key"));
        }

        if base_url.ends_with('/') {
            base_url.pop();
        }
        Url::parse(&base_url)?;

        Ok(Self {
            base_url,
            api_key,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    /// Creates a configuration from environment variables.
    ///
    /// Reads:
    /// - `OPENWEBUI_BASE_URL` (required)
    /// - `OPENWEBUI_API_KEY` (required)
    /// - `OPENWEBUI_TIMEOUT_MS` (optional, defaults to 30000)
    ///
    /// ## Errors
    ///
    /// Returns an error if a required variable is unset or empty, or if the
    /// timeout is not a whole number of milliseconds.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = non_empty_var(ENV_BASE_URL).ok_or(ConfigError::missing_field("base_url"))?;
        let api_key = non_empty_var(ENV_API_KEY).ok_or(ConfigError::missing_field("api_key"))?;

        let mut config = Self::new(base_url, api_key)?;
        if let Some(raw) = non_empty_var(ENV_TIMEOUT_MS) {
            let ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidTimeout { value: raw.clone() })?;
            config = config.with_timeout_ms(ms);
        }

        debug!(
            base_url = %config.base_url,
            timeout_ms = config.timeout_ms(),
            "Open WebUI client configured from environment"
        );

        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the request timeout in milliseconds.
    #[must_use]
    pub fn with_timeout_ms(self, timeout_ms: u64) -> Self {
        self.with_timeout(Duration::from_millis(timeout_ms))
    }

    /// The base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The bearer credential.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// The per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The per-call timeout in milliseconds.
    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }

    /// Joins a request path onto the base URL.
    pub(crate) fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout", &self.timeout)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped_once() {
        let with_slash = ClientConfig::new("http://localhost:3000/", "key").unwrap();
        let without = ClientConfig::new("http://localhost:3000", "key").unwrap();
        assert_eq!(with_slash.base_url(), "http://localhost:3000");
        assert_eq!(with_slash, without);

        let double = ClientConfig::new("http://localhost:3000//", "key").unwrap();
        assert_eq!(double.base_url(), "http://localhost:3000/");
    }

    #[test]
    fn test_path_prefix_is_kept() {
        let config = ClientConfig::new("https://example.com/webui/", "key").unwrap();
        assert_eq!(config.url_for("/api/models"), "https://example.com/webui/api/models");
    }

    #[test]
    fn test_empty_base_url_fails() {
        let err = ClientConfig::new("", "key").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field: "base_url" }));
    }

    #[test]
    fn test_empty_api_key_fails() {
        let err = ClientConfig::new("http://localhost:3000", "").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField { field: "api_key" }));
    }

    #[test]
    fn test_relative_url_fails() {
        let err = ClientConfig::new("localhost-without-scheme", "key").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl(_)));
    }

    #[test]
    fn test_default_timeout() {
        let config = ClientConfig::new("http://localhost:3000", "key").unwrap();
        assert_eq!(config.timeout_ms(), 30_000);
        assert_eq!(config.timeout(), Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }

    #[test]
    fn test_explicit_timeout_is_verbatim() {
        let config = ClientConfig::new("http://localhost:3000", "key")
            .unwrap()
            .with_timeout_ms(5000);
        assert_eq!(config.timeout_ms(), 5000);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = ClientConfig::new("http://localhost:3000", "sk-very-secret").unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
