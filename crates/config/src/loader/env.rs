//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `PAGERDUTY_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none("PAGERDUTY_API_HOST") {
        loader.set_base_url(Some(url));
    }
    if let Some(key) = env_var_or_none("PAGERDUTY_USER_API_KEY") {
        loader.set_api_key(Some(SecretString::new(key.into())));
    }
    if let Some(token) = env_var_or_none("PAGERDUTY_OAUTH_TOKEN") {
        loader.set_oauth_token(Some(SecretString::new(token.into())));
    }
    if let Some(timeout) = env_var_or_none("PAGERDUTY_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "PAGERDUTY_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none("PAGERDUTY_MAX_RETRIES") {
        let value: usize = retries.parse().map_err(|_| ConfigError::InvalidValue {
            var: "PAGERDUTY_MAX_RETRIES".to_string(),
            message: "must be a non-negative integer".to_string(),
        })?;
        loader.set_max_retries(Some(value));
    }

    Ok(())
}
