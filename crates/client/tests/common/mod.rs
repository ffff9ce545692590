//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the PagerDuty client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - All fixture files must be valid JSON
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

use std::time::Duration;

#[allow(unused_imports)]
pub use pagerduty_client::testing::load_fixture;

#[allow(unused_imports)]
pub use pagerduty_client::{AuthStrategy, PagerDutyClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// API key used by every mock-backed client.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "u+test-key";

/// Client pointed at `server` with an API key and the given retry budget.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, max_retries: usize) -> PagerDutyClient {
    PagerDutyClient::builder()
        .base_url(server.uri())
        .auth_strategy(AuthStrategy::api_key(TEST_API_KEY))
        .max_retries(max_retries)
        .timeout(Duration::from_secs(5))
        .build()
        .expect("client should build")
}
