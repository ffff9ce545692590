//! Main PagerDuty REST API client.
//!
//! This module provides [`PagerDutyClient`], the HTTP implementation of
//! [`PageSource`].
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `alerts`: Incident alert methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Page walking (delegated to [`crate::pagination`])
//!
//! # Invariants
//! - The client is immutable after construction and safe to share across tasks.
//! - Only HTTP 429 responses are retried, up to `max_retries` times.

pub mod builder;

mod alerts;

use std::future::Future;
use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::endpoints;
use crate::error::Result;
use crate::pagination::{Page, PageSource, QueryParams};

/// PagerDuty REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use pagerduty_client::{AuthStrategy, PagerDutyClient};
///
/// let client = PagerDutyClient::builder()
///     .base_url("https://api.pagerduty.com".to_string())
///     .auth_strategy(AuthStrategy::api_key("u+abc123"))
///     .build()?;
///
/// let alerts = client.list_alerts("PINC123", Some(25)).await?;
/// ```
#[derive(Debug)]
pub struct PagerDutyClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth_strategy: AuthStrategy,
    pub(crate) max_retries: usize,
    pub(crate) timeout: Duration,
}

impl PagerDutyClient {
    /// Create a new client builder.
    pub fn builder() -> builder::PagerDutyClientBuilder {
        builder::PagerDutyClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}

impl PageSource for PagerDutyClient {
    fn fetch_page(
        &self,
        entity: &str,
        params: &QueryParams,
    ) -> impl Future<Output = Result<Page>> + Send {
        endpoints::fetch_page(
            &self.http,
            &self.base_url,
            &self.auth_strategy,
            entity,
            params,
            self.max_retries,
            self.timeout,
        )
    }
}
