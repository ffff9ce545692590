//! Error types for the PagerDuty client.
//!
//! Two families of failure exist:
//! - [`ValidationError`]: a raw record could not be normalized into a typed model.
//! - Transport failures: every other [`ClientError`] variant, raised while
//!   fetching a page.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// A raw record failed normalization.
///
/// Names the offending field (by its wire key) and the reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid field `{field}`: {reason}")]
pub struct ValidationError {
    pub field: String,
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors that can occur during PagerDuty client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A single record failed normalization.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A record inside a fetched batch failed normalization.
    #[error("Invalid record at position {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },

    /// Authentication failed.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from PagerDuty.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid response format from PagerDuty.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Request timed out.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Rate limited - too many requests.
    #[error("Rate limited: retry after {0:?}")]
    RateLimited(Option<Duration>),

    /// Connection refused.
    #[error("Connection refused to {0}")]
    ConnectionRefused(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Unauthorized access.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ClientError {
    /// Check if this error came from normalizing a record.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::InvalidRecord { .. })
    }

    /// Check if this error came from fetching a page.
    pub fn is_transport(&self) -> bool {
        !self.is_validation()
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Only 429 (Too Many Requests) is retried; PagerDuty documents it as the
    /// rate-limit signal. Every other status fails immediately.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_) | Self::Unauthorized(_))
    }
}

/// Map a reqwest failure to the most specific variant.
pub(crate) fn classify_reqwest_error(err: reqwest::Error, url: &str, timeout: Duration) -> ClientError {
    if err.is_timeout() {
        ClientError::Timeout(timeout)
    } else if err.is_connect() {
        ClientError::ConnectionRefused(url.to_string())
    } else {
        ClientError::HttpError(err)
    }
}
