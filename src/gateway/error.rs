/**
 * Gateway Error Types
 *
 * Errors raised while assembling and running the edge gateway. Request-time
 * verification failures are not here on purpose: the route guard maps every
 * one of them to a denial, so they never propagate as errors.
 */

use thiserror::Error;

use crate::gateway::verify::VerifyError;

/// Errors from gateway startup and configuration
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Invalid configuration value (bad env override, unparsable address)
    #[error("configuration error: {0}")]
    Config(String),

    /// Configuration file was found but could not be parsed
    #[error("invalid configuration file {path}: {source}")]
    ConfigFile {
        /// Path of the offending file
        path: String,
        /// Underlying TOML parse error
        #[source]
        source: toml::de::Error,
    },

    /// Filesystem error reading configuration
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The verification HTTP client could not be built
    #[error("failed to build session verifier: {0}")]
    Verifier(#[from] VerifyError),
}
