//! Authentication strategies for the PagerDuty REST API.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating with PagerDuty.
#[derive(Debug, Clone)]
pub enum AuthStrategy {
    /// REST API key, sent as `Authorization: Token token=<key>`.
    ApiKey { key: SecretString },
    /// OAuth access token, sent as `Authorization: Bearer <token>`.
    OAuth { token: SecretString },
}

impl AuthStrategy {
    pub fn api_key(key: impl Into<String>) -> Self {
        Self::ApiKey {
            key: SecretString::new(key.into().into()),
        }
    }

    pub fn oauth(token: impl Into<String>) -> Self {
        Self::OAuth {
            token: SecretString::new(token.into().into()),
        }
    }

    /// Value for the `Authorization` header.
    pub(crate) fn authorization_header(&self) -> String {
        match self {
            Self::ApiKey { key } => format!("Token token={}", key.expose_secret()),
            Self::OAuth { token } => format!("Bearer {}", token.expose_secret()),
        }
    }

    /// Short label safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ApiKey { .. } => "api_key",
            Self::OAuth { .. } => "oauth",
        }
    }
}

impl From<pagerduty_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: pagerduty_config::AuthStrategy) -> Self {
        match strategy {
            pagerduty_config::AuthStrategy::ApiKey { key } => Self::ApiKey { key },
            pagerduty_config::AuthStrategy::OAuth { token } => Self::OAuth { token },
        }
    }
}
