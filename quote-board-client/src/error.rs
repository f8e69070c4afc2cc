use serde::{Deserialize, Serialize};

/// Unified error type for all Quote Board client operations.
///
/// Every failure is scoped to the single operation that produced it. All
/// variants are serializable for structured error reporting.
///
/// # Retryable Errors
///
/// The following variants represent transient failures that may succeed on retry:
/// - [`NetworkError`](Self::NetworkError): network connectivity issues
/// - [`Timeout`](Self::Timeout): request timed out
/// - [`RateLimited`](Self::RateLimited): server asked the client to slow down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "code")]
pub enum QuoteError {
    /// A network-level error occurred (connection refused, DNS failure, etc.).
    #[error("Network error: {detail}")]
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timed out: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with HTTP 429.
    #[error("Rate limited (retry after {retry_after:?}s)")]
    RateLimited {
        /// Suggested wait time in seconds, if the server sent `Retry-After`.
        retry_after: Option<u64>,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status}: {}", .raw_message.as_deref().unwrap_or("<empty body>"))]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        raw_message: Option<String>,
    },

    /// The response body could not be interpreted.
    #[error("Malformed response: {detail}")]
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// A request field failed client-side validation; nothing was sent.
    #[error("Invalid {param}: {detail}")]
    InvalidParameter {
        /// Name of the invalid field.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },

    /// The client configuration is unusable (e.g. a malformed base URL).
    #[error("Invalid configuration: {detail}")]
    InvalidConfig {
        /// Description of what's wrong.
        detail: String,
    },
}

impl QuoteError {
    /// Whether the failure is transient and the same request may succeed later.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::NetworkError { .. } | Self::Timeout { .. } | Self::RateLimited { .. }
        )
    }

    pub(crate) fn parse(detail: impl ToString) -> Self {
        Self::ParseError {
            detail: detail.to_string(),
        }
    }

    pub(crate) fn invalid_parameter(param: &str, detail: impl ToString) -> Self {
        Self::InvalidParameter {
            param: param.to_string(),
            detail: detail.to_string(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn transient_errors_are_retryable() {
        assert!(
            QuoteError::NetworkError {
                detail: "refused".into()
            }
            .is_retryable()
        );
        assert!(
            QuoteError::Timeout {
                detail: "10s".into()
            }
            .is_retryable()
        );
        assert!(
            QuoteError::RateLimited {
                retry_after: Some(3),
                raw_message: None
            }
            .is_retryable()
        );
    }

    #[test]
    fn client_and_server_rejections_are_not_retryable() {
        assert!(
            !QuoteError::HttpStatus {
                status: 500,
                raw_message: None
            }
            .is_retryable()
        );
        assert!(!QuoteError::parse("bad json").is_retryable());
        assert!(!QuoteError::invalid_parameter("quote", "must not be empty").is_retryable());
    }

    #[test]
    fn serializes_with_code_tag() {
        let json = serde_json::to_value(QuoteError::HttpStatus {
            status: 404,
            raw_message: Some("not found".into()),
        })
        .unwrap();
        assert_eq!(json["code"], "HttpStatus");
        assert_eq!(json["status"], 404);
    }

    #[test]
    fn display_falls_back_for_empty_body() {
        let err = QuoteError::HttpStatus {
            status: 500,
            raw_message: None,
        };
        assert_eq!(err.to_string(), "HTTP 500: <empty body>");
    }
}
