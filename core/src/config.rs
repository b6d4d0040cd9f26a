//! Client configuration.
//!
//! The base URL resolves in this order: explicit value, the `POKE_API_URL`
//! environment variable, then `http://localhost:8000`. No request timeout is
//! set unless one is configured.

use std::time::Duration;

/// Base URL used when neither the caller nor the environment supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable that overrides [`DEFAULT_BASE_URL`].
pub const API_URL_ENV: &str = "POKE_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    /// Total per-request timeout. `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            user_agent: format!("poke-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Default configuration with the base URL taken from `POKE_API_URL`
    /// when set and non-empty.
    pub fn from_env() -> Self {
        Self::new(resolve_base_url(std::env::var(API_URL_ENV).ok()))
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

fn resolve_base_url(from_env: Option<String>) -> String {
    from_env
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
