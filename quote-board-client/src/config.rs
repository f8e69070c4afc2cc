//! Client configuration

use std::time::Duration;

use url::Url;

use crate::error::{QuoteError, Result};

/// Default connect timeout (seconds)
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
/// Default request timeout (seconds)
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`HttpQuoteApi`](crate::HttpQuoteApi).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server root, always ending in `/` so relative joins keep any path prefix.
    base_url: Url,
    /// Connect timeout
    pub connect_timeout: Duration,
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// Automatic retries for idempotent reads. Mutations are never retried.
    pub max_retries: u32,
}

impl ClientConfig {
    /// Build a config for the server at `base_url`.
    ///
    /// Only `http` and `https` URLs are accepted.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut url = Url::parse(base_url.trim()).map_err(|e| QuoteError::InvalidConfig {
            detail: format!("invalid server URL '{base_url}': {e}"),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(QuoteError::InvalidConfig {
                detail: format!("unsupported URL scheme '{}'", url.scheme()),
            });
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        Ok(Self {
            base_url: url,
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            max_retries: 0,
        })
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve an endpoint path (e.g. `quotes/42`) against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| QuoteError::InvalidConfig {
            detail: format!("cannot build URL for '{path}': {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_path_prefix_when_joining() {
        let Ok(config) = ClientConfig::new("http://example.com/api") else {
            panic!("valid URL rejected");
        };
        let url = config.endpoint("quotes/7").map(|u| u.to_string());
        assert_eq!(url, Ok("http://example.com/api/quotes/7".to_string()));
    }

    #[test]
    fn root_url_joins_cleanly() {
        let Ok(config) = ClientConfig::new("http://localhost:8080") else {
            panic!("valid URL rejected");
        };
        let url = config.endpoint("quotes").map(|u| u.to_string());
        assert_eq!(url, Ok("http://localhost:8080/quotes".to_string()));
    }

    #[test]
    fn rejects_non_http_scheme() {
        assert!(matches!(
            ClientConfig::new("ftp://example.com"),
            Err(QuoteError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_garbage() {
        assert!(ClientConfig::new("not a url").is_err());
    }

    #[test]
    fn builder_overrides_defaults() {
        let Ok(config) = ClientConfig::new("https://quotes.example") else {
            panic!("valid URL rejected");
        };
        let config = config
            .with_request_timeout(Duration::from_secs(3))
            .with_max_retries(2);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert_eq!(config.max_retries, 2);
    }
}
