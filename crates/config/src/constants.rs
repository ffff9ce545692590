//! Centralized constants for the PagerDuty alerts workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default PagerDuty REST API host.
pub const DEFAULT_BASE_URL: &str = "https://api.pagerduty.com";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound accepted for the retry count.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Pagination Defaults
// =============================================================================

/// Default ceiling on records returned by a single list operation.
pub const DEFAULT_MAX_RESULTS: usize = 1000;

/// Page size requested when the caller does not pass an explicit `limit`.
pub const DEFAULT_PAGE_SIZE: usize = 100;
