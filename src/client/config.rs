/**
 * Client Configuration
 *
 * Holds the auth backend's base URL and the request timeout used by the
 * auth client. Defaults are suitable for local development against the
 * backend on its standard port.
 */

use std::time::Duration;

/// Default backend base URL
const DEFAULT_API_URL: &str = "http://127.0.0.1:8000";

/// Default per-request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the auth client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url =
            std::env::var("PMS_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        Self { base_url, timeout: DEFAULT_TIMEOUT }
    }
}

impl ClientConfig {
    /// Create a configuration from the environment (`PMS_API_URL`) or defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), timeout: DEFAULT_TIMEOUT }
    }

    /// Override the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured request timeout
    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }

    /// Full URL for an API endpoint path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}
