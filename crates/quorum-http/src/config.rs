//! API configuration.
//!
//! Supports explicit construction and environment-variable fallback
//! (`QUORUM_API_BASE`, `QUORUM_API_TIMEOUT_SECS`).

use quorum_core::error::{QuorumError, Result};
use std::env;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "http://localhost:3000/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the Quorum backend.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the API, e.g. `https://quorum.example/v1`
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration for the given base URL with the default timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads configuration from environment variables.
    ///
    /// `QUORUM_API_BASE` overrides the base URL and `QUORUM_API_TIMEOUT_SECS`
    /// the timeout; unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        let base_url =
            env::var("QUORUM_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let timeout_secs = env::var("QUORUM_API_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    /// Builds the shared HTTP client: cookie store enabled so the login
    /// cookie is presented on subsequent `/me` calls, per-request timeout
    /// from this configuration.
    pub fn build_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .cookie_store(true)
            .timeout(self.timeout)
            .build()
            .map_err(|e| QuorumError::transport(format!("failed to build HTTP client: {e}")))
    }

    /// Joins the base URL with an endpoint path.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
