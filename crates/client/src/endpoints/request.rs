//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with HTTP 429 (Too Many Requests) are retried, waiting
//! for the server's `Retry-After` when present and `2^attempt` seconds
//! otherwise. Every other failure is returned immediately, mapped onto
//! [`ClientError`].

use std::time::Duration;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ClientError, Result, classify_reqwest_error};

/// PagerDuty error envelope: `{"error": {"message", "code", "errors"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    errors: Vec<String>,
}

/// Render an error body for display, falling back to the raw text.
pub(crate) fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => {
            let mut message = error.message.unwrap_or_else(|| "Unknown error".to_string());
            if let Some(code) = error.code {
                message = format!("{message} (code {code})");
            }
            if !error.errors.is_empty() {
                message = format!("{message}: {}", error.errors.join("; "));
            }
            message
        }
        Err(_) if body.trim().is_empty() => "empty response body".to_string(),
        Err(_) => body.to_string(),
    }
}

fn retry_after(response: &Response) -> Option<Duration> {
    response
        .headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.trim().parse::<u64>().ok())
        .map(Duration::from_secs)
}

/// Wait before retry number `attempt + 1`: the server's `Retry-After` when
/// given, else `2^attempt` seconds.
fn backoff_delay(attempt: usize, retry_after: Option<Duration>) -> Duration {
    retry_after.unwrap_or_else(|| Duration::from_secs(2u64.saturating_pow(attempt as u32)))
}

/// Sends an HTTP request, retrying HTTP 429 responses.
///
/// # Arguments
///
/// * `builder` - The `reqwest::RequestBuilder` to execute
/// * `url` - Request URL, used in error messages
/// * `max_retries` - Retries after the first attempt; `0` disables retrying
/// * `timeout` - Configured client timeout, reported on `ClientError::Timeout`
///
/// # Errors
///
/// - `ClientError::RateLimited` when the first 429 arrives and retries are disabled.
/// - `ClientError::MaxRetriesExceeded` when every retry was rate limited too.
/// - `ClientError::Unauthorized` for 401, `ClientError::NotFound` for 404,
///   `ClientError::ApiError` for any other non-success status.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    url: &str,
    max_retries: usize,
    timeout: Duration,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Request builder cannot be cloned, single attempt only");
                let response = builder
                    .send()
                    .await
                    .map_err(|e| classify_reqwest_error(e, url, timeout))?;
                return check_status(response, url).await;
            }
        };

        let response = attempt_builder
            .send()
            .await
            .map_err(|e| classify_reqwest_error(e, url, timeout))?;

        if !ClientError::is_retryable_status(response.status().as_u16()) {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return check_status(response, url).await;
        }

        let wait = retry_after(&response);
        if attempt == max_retries {
            debug!(attempts = attempt + 1, "Retries exhausted for rate-limited request");
            return Err(if max_retries == 0 {
                ClientError::RateLimited(wait)
            } else {
                ClientError::MaxRetriesExceeded(max_retries + 1)
            });
        }

        let backoff = backoff_delay(attempt, wait);
        debug!(
            attempt = attempt + 1,
            max_retries = max_retries + 1,
            backoff_ms = backoff.as_millis() as u64,
            "Rate limited (HTTP 429), retrying"
        );
        tokio::time::sleep(backoff).await;
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}

async fn check_status(response: Response, url: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());
    let message = error_message(&body);

    Err(match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
        StatusCode::NOT_FOUND => ClientError::NotFound(url.to_string()),
        _ => ClientError::ApiError {
            status: status.as_u16(),
            url: url.to_string(),
            message,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_envelope() {
        let body = r#"{"error":{"message":"Invalid Input Provided","code":2001,"errors":["Limit must be positive"]}}"#;
        assert_eq!(
            error_message(body),
            "Invalid Input Provided (code 2001): Limit must be positive"
        );
    }

    #[test]
    fn test_error_message_without_details() {
        let body = r#"{"error":{"message":"Not Found"}}"#;
        assert_eq!(error_message(body), "Not Found");
    }

    #[test]
    fn test_backoff_doubles_without_retry_after() {
        assert_eq!(backoff_delay(0, None), Duration::from_secs(1));
        assert_eq!(backoff_delay(1, None), Duration::from_secs(2));
        assert_eq!(backoff_delay(2, None), Duration::from_secs(4));
    }

    #[test]
    fn test_backoff_prefers_retry_after() {
        assert_eq!(backoff_delay(2, Some(Duration::ZERO)), Duration::ZERO);
        assert_eq!(backoff_delay(0, Some(Duration::from_secs(7))), Duration::from_secs(7));
    }

    #[test]
    fn test_error_message_falls_back_to_body() {
        assert_eq!(error_message("<html>bad gateway</html>"), "<html>bad gateway</html>");
        assert_eq!(error_message("  "), "empty response body");
    }
}
