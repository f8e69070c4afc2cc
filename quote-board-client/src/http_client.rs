//! Shared HTTP request handling
//!
//! Every endpoint goes through [`HttpUtils::execute_request`] so that logging,
//! status classification and body reading behave identically.

use std::time::Duration;

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;

use crate::error::{QuoteError, Result};
use crate::utils::log_sanitizer::truncate_for_log;

/// HTTP tool function set
pub(crate) struct HttpUtils;

impl HttpUtils {
    /// Send a request and return the body of a 2xx response.
    ///
    /// # Errors
    /// * `Timeout` / `NetworkError` when the request never completes
    /// * `RateLimited` for HTTP 429
    /// * `HttpStatus` for any other non-2xx status
    pub async fn execute_request(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
    ) -> Result<String> {
        log::debug!("{method_name} {url}");

        let response = request_builder.send().await.map_err(|e| {
            if e.is_timeout() {
                QuoteError::Timeout {
                    detail: e.to_string(),
                }
            } else {
                QuoteError::NetworkError {
                    detail: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        log::debug!("{method_name} {url} -> {}", status.as_u16());

        // Read before consuming the body
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.trim().parse::<u64>().ok());

        let body = response
            .text()
            .await
            .map_err(|e| QuoteError::NetworkError {
                detail: format!("Failed to read response body: {e}"),
            })?;

        log::debug!("Response Body: {}", truncate_for_log(&body));

        if status.as_u16() == 429 {
            log::warn!("{method_name} {url} rate limited, retry_after={retry_after:?}");
            return Err(QuoteError::RateLimited {
                retry_after,
                raw_message: non_empty(body),
            });
        }

        if !status.is_success() {
            log::warn!("{method_name} {url} failed with HTTP {}", status.as_u16());
            return Err(QuoteError::HttpStatus {
                status: status.as_u16(),
                raw_message: non_empty(body),
            });
        }

        Ok(body)
    }

    /// Parse a JSON response body, logging the raw text on failure.
    pub fn parse_json<T>(response_text: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        serde_json::from_str(response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            log::error!("Raw response: {}", truncate_for_log(response_text));
            QuoteError::parse(e)
        })
    }

    /// Same as [`execute_request`](Self::execute_request) with retries for
    /// transient failures.
    ///
    /// Only used for idempotent reads. Backoff: 100ms, 200ms, 400ms, ...
    /// capped at 10s; a `Retry-After` hint (capped at 30s) takes precedence.
    pub async fn execute_request_with_retry(
        request_builder: RequestBuilder,
        method_name: &str,
        url: &str,
        max_retries: u32,
    ) -> Result<String> {
        if max_retries == 0 {
            return Self::execute_request(request_builder, method_name, url).await;
        }

        let mut last_error = None;

        for attempt in 0..=max_retries {
            // RequestBuilder is single-use
            let Some(req) = request_builder.try_clone() else {
                log::warn!("{method_name} {url}: request cannot be cloned, retry disabled");
                return Self::execute_request(request_builder, method_name, url).await;
            };

            match Self::execute_request(req, method_name, url).await {
                Ok(body) => return Ok(body),
                Err(e) if attempt < max_retries && e.is_retryable() => {
                    let delay = retry_delay(&e, attempt);
                    log::warn!(
                        "{} {} failed (attempt {}/{}), retrying in {:.1}s: {}",
                        method_name,
                        url,
                        attempt + 1,
                        max_retries,
                        delay.as_secs_f32(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| QuoteError::NetworkError {
            detail: "All retries exhausted with no error captured".to_string(),
        }))
    }
}

fn non_empty(body: String) -> Option<String> {
    if body.trim().is_empty() {
        None
    } else {
        Some(body)
    }
}

fn retry_delay(error: &QuoteError, attempt: u32) -> Duration {
    if let QuoteError::RateLimited {
        retry_after: Some(secs),
        ..
    } = error
    {
        Duration::from_secs((*secs).min(30))
    } else {
        backoff_delay(attempt)
    }
}

fn backoff_delay(attempt: u32) -> Duration {
    let capped_attempt = attempt.min(20);
    let delay_ms = 100_u64.saturating_mul(1_u64 << capped_attempt);
    Duration::from_millis(delay_ms.min(10_000))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_from_100ms() {
        assert_eq!(backoff_delay(0), Duration::from_millis(100));
        assert_eq!(backoff_delay(1), Duration::from_millis(200));
        assert_eq!(backoff_delay(3), Duration::from_millis(800));
    }

    #[test]
    fn backoff_capped_at_10s() {
        assert_eq!(backoff_delay(7), Duration::from_millis(10_000));
        assert_eq!(backoff_delay(u32::MAX), Duration::from_millis(10_000));
    }

    #[test]
    fn retry_after_hint_wins_and_is_capped() {
        let hinted = QuoteError::RateLimited {
            retry_after: Some(3),
            raw_message: None,
        };
        assert_eq!(retry_delay(&hinted, 5), Duration::from_secs(3));

        let greedy = QuoteError::RateLimited {
            retry_after: Some(600),
            raw_message: None,
        };
        assert_eq!(retry_delay(&greedy, 0), Duration::from_secs(30));
    }

    #[test]
    fn blank_bodies_are_dropped() {
        assert_eq!(non_empty("  \n".to_string()), None);
        assert_eq!(non_empty("oops".to_string()), Some("oops".to_string()));
    }

    #[test]
    fn parse_json_reports_malformed_body() {
        let result: Result<crate::QuoteList> = HttpUtils::parse_json("<html>");
        assert!(
            matches!(&result, Err(QuoteError::ParseError { .. })),
            "unexpected parse result: {result:?}"
        );
    }
}
