//! Client builder for constructing [`PagerDutyClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, auth_strategy)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, redirects)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`PagerDutyClient`] methods)
//! - Loading settings from the environment (see `pagerduty_config::ConfigLoader`)
//!
//! # Invariants
//! - `base_url` and `auth_strategy` must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use pagerduty_config::Config;
use pagerduty_config::constants::{DEFAULT_MAX_REDIRECTS, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};
use tracing::debug;

use crate::auth::AuthStrategy;
use crate::client::PagerDutyClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`PagerDutyClient`].
///
/// All options have defaults except `base_url` and `auth_strategy`.
pub struct PagerDutyClientBuilder {
    base_url: Option<String>,
    auth_strategy: Option<AuthStrategy>,
    timeout: Duration,
    max_retries: usize,
}

impl Default for PagerDutyClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl PagerDutyClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://api.pagerduty.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = Some(strategy);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    /// `0` disables retrying.
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Pre-configure the builder from a loaded [`Config`].
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.auth_strategy = Some(AuthStrategy::from(config.auth.strategy.clone()));
        self.timeout = config.connection.timeout;
        self.max_retries = config.connection.max_retries;
        self
    }

    /// `"https://api.pagerduty.com//"` -> `"https://api.pagerduty.com"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`PagerDutyClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided or is empty.
    /// Returns [`ClientError::AuthFailed`] if `auth_strategy` was not provided.
    /// Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<PagerDutyClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let auth_strategy = self
            .auth_strategy
            .ok_or_else(|| ClientError::AuthFailed("auth_strategy is required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .build()?;

        debug!(
            base_url = %base_url,
            auth = auth_strategy.kind(),
            timeout_secs = self.timeout.as_secs(),
            max_retries = self.max_retries,
            "Built PagerDuty client"
        );

        Ok(PagerDutyClient {
            http,
            base_url,
            auth_strategy,
            max_retries: self.max_retries,
            timeout: self.timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        let cases = [
            ("https://api.pagerduty.com/", "https://api.pagerduty.com"),
            ("https://api.pagerduty.com", "https://api.pagerduty.com"),
            ("http://localhost:8080//", "http://localhost:8080"),
        ];
        for (input, expected) in cases {
            assert_eq!(
                PagerDutyClientBuilder::normalize_base_url(input.to_string()),
                expected
            );
        }
    }

    #[test]
    fn test_build_requires_base_url() {
        let err = PagerDutyClientBuilder::new()
            .auth_strategy(AuthStrategy::api_key("k"))
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }

    #[test]
    fn test_build_requires_auth() {
        let err = PagerDutyClientBuilder::new()
            .base_url("https://api.pagerduty.com".to_string())
            .build()
            .unwrap_err();
        assert!(matches!(err, ClientError::AuthFailed(_)));
    }

    #[test]
    fn test_build_applies_settings() {
        let client = PagerDutyClientBuilder::new()
            .base_url("https://api.pagerduty.com/".to_string())
            .auth_strategy(AuthStrategy::oauth("t"))
            .max_retries(0)
            .timeout(Duration::from_secs(5))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.pagerduty.com");
        assert_eq!(client.max_retries(), 0);
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_config() {
        let mut config = Config::with_api_key(
            "http://127.0.0.1:9999/".to_string(),
            secrecy::SecretString::new("u+key".to_string().into()),
        );
        config.connection.max_retries = 1;

        let client = PagerDutyClientBuilder::new()
            .from_config(&config)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://127.0.0.1:9999");
        assert_eq!(client.max_retries(), 1);
        assert_eq!(client.auth_strategy.authorization_header(), "Token token=u+key");
    }
}
