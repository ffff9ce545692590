//! Shared test utilities for pagerduty-cli integration tests.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `PAGERDUTY_USER_API_KEY` is set to `TEST_API_KEY` unless overridden.

use assert_cmd::Command;

pub use pagerduty_client::testing::load_fixture;

pub const TEST_API_KEY: &str = "u+cli-test-key";

/// Returns a hermetic `pagerduty-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `PAGERDUTY_USER_API_KEY` is set to a dummy value to satisfy config validation.
/// - Other PagerDuty env vars are cleared so nothing leaks from the host.
pub fn pagerduty_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("pagerduty-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("PAGERDUTY_USER_API_KEY", TEST_API_KEY);

    cmd.env_remove("PAGERDUTY_API_HOST")
        .env_remove("PAGERDUTY_OAUTH_TOKEN")
        .env_remove("PAGERDUTY_TIMEOUT")
        .env_remove("PAGERDUTY_MAX_RETRIES")
        .env_remove("RUST_LOG");

    cmd
}

/// `pagerduty_cmd()` pointed at `base_url`, with the spinner off.
#[allow(dead_code)]
pub fn pagerduty_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = pagerduty_cmd();
    cmd.env("PAGERDUTY_API_HOST", base_url).arg("--quiet");
    cmd
}
