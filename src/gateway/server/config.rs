/**
 * Gateway Configuration
 *
 * Loads gateway settings from an optional TOML file with environment
 * variable overrides, defaulting to values suitable for local development.
 *
 * # Sources, in order
 *
 * 1. Built-in defaults
 * 2. TOML file: the path in `INNGATE_CONFIG`, else `inngate.toml` if present
 * 3. `INNGATE_*` environment variables
 */

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::gateway::error::GatewayError;

/// Default listen address for the gateway
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4000";

/// Default auth backend base URL
const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Route namespace requiring team/admin authorization
const DEFAULT_PROTECTED_PREFIX: &str = "/management";

/// Login page denials redirect to
const DEFAULT_LOGIN_PATH: &str = "/login";

/// Timeout for the per-request verification call, in seconds
const DEFAULT_VERIFY_TIMEOUT_SECS: u64 = 5;

/// Gateway settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GatewayConfig {
    listen_addr: String,
    backend_url: String,
    protected_prefix: String,
    login_path: String,
    verify_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            protected_prefix: DEFAULT_PROTECTED_PREFIX.to_string(),
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            verify_timeout_secs: DEFAULT_VERIFY_TIMEOUT_SECS,
        }
    }
}

impl GatewayConfig {
    /// Load configuration from file and environment
    ///
    /// A missing configuration file is not an error (defaults apply); an
    /// unreadable or unparsable one is.
    pub fn load() -> Result<Self, GatewayError> {
        let mut config = match std::env::var("INNGATE_CONFIG") {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new("inngate.toml").exists() => Self::from_file("inngate.toml")?,
            Err(_) => Self::default(),
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Parse configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self, GatewayError> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|source| GatewayError::ConfigFile {
            path: path.to_string(),
            source,
        })
    }

    /// Apply `INNGATE_*` environment overrides
    fn apply_env(&mut self) -> Result<(), GatewayError> {
        if let Ok(value) = std::env::var("INNGATE_LISTEN_ADDR") {
            self.listen_addr = value;
        }
        if let Ok(value) = std::env::var("INNGATE_BACKEND_URL") {
            self.backend_url = value;
        }
        if let Ok(value) = std::env::var("INNGATE_PROTECTED_PREFIX") {
            self.protected_prefix = value;
        }
        if let Ok(value) = std::env::var("INNGATE_LOGIN_PATH") {
            self.login_path = value;
        }
        if let Ok(value) = std::env::var("INNGATE_VERIFY_TIMEOUT_SECS") {
            self.verify_timeout_secs = value.parse().map_err(|_| {
                GatewayError::Config(format!(
                    "INNGATE_VERIFY_TIMEOUT_SECS is not a number: {value:?}"
                ))
            })?;
        }
        Ok(())
    }

    /// Address the gateway listens on
    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    /// Auth backend base URL
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Protected route prefix
    pub fn protected_prefix(&self) -> &str {
        &self.protected_prefix
    }

    /// Login page path used in denial redirects
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Timeout for the per-request verification call
    pub fn verify_timeout(&self) -> Duration {
        Duration::from_secs(self.verify_timeout_secs)
    }

    /// Whether a request path falls under the protected prefix
    ///
    /// Matches the prefix as a whole path segment: `/management` and
    /// `/management/guests` are protected, `/managementfoo` is not.
    pub fn is_protected(&self, path: &str) -> bool {
        match path.strip_prefix(self.protected_prefix.as_str()) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults() {
        let config = GatewayConfig::default();
        assert_eq!(config.listen_addr(), "0.0.0.0:4000");
        assert_eq!(config.backend_url(), "http://127.0.0.1:8000");
        assert_eq!(config.protected_prefix(), "/management");
        assert_eq!(config.login_path(), "/login");
        assert_eq!(config.verify_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_is_protected_matches_whole_segments() {
        let config = GatewayConfig::default();
        assert!(config.is_protected("/management"));
        assert!(config.is_protected("/management/guests/42"));
        assert!(!config.is_protected("/managementfoo"));
        assert!(!config.is_protected("/"));
        assert!(!config.is_protected("/dashboard"));
    }

    #[test]
    fn test_toml_parse() {
        let config: GatewayConfig = toml::from_str(
            r#"
            listen_addr = "127.0.0.1:9999"
            backend_url = "https://api.innkeep.example"
            verify_timeout_secs = 2
            "#,
        )
        .unwrap();
        assert_eq!(config.listen_addr(), "127.0.0.1:9999");
        assert_eq!(config.backend_url(), "https://api.innkeep.example");
        assert_eq!(config.verify_timeout(), Duration::from_secs(2));
        // unspecified fields keep their defaults
        assert_eq!(config.protected_prefix(), "/management");
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        std::env::set_var("INNGATE_BACKEND_URL", "http://10.0.0.5:8000");
        std::env::set_var("INNGATE_PROTECTED_PREFIX", "/staff");

        let mut config = GatewayConfig::default();
        config.apply_env().unwrap();
        assert_eq!(config.backend_url(), "http://10.0.0.5:8000");
        assert!(config.is_protected("/staff/rooms"));
        assert!(!config.is_protected("/management"));

        std::env::remove_var("INNGATE_BACKEND_URL");
        std::env::remove_var("INNGATE_PROTECTED_PREFIX");
    }

    #[test]
    #[serial]
    fn test_bad_timeout_env_is_rejected() {
        std::env::set_var("INNGATE_VERIFY_TIMEOUT_SECS", "soon");

        let mut config = GatewayConfig::default();
        let err = config.apply_env().unwrap_err();
        assert!(matches!(err, GatewayError::Config(_)));

        std::env::remove_var("INNGATE_VERIFY_TIMEOUT_SECS");
    }
}
