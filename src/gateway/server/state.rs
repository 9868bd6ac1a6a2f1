/**
 * Gateway Application State
 *
 * Shared state for the gateway router. Everything here is immutable after
 * startup: the configuration is behind an `Arc`, and the verifier's HTTP
 * client is internally reference-counted. Request handling never mutates
 * shared state, so concurrent navigations are fully independent.
 */

use std::sync::Arc;

use crate::gateway::server::config::GatewayConfig;
use crate::gateway::verify::SessionVerifier;

/// State shared across gateway request handling
#[derive(Debug, Clone)]
pub struct GatewayState {
    /// Gateway configuration, fixed at startup
    pub config: Arc<GatewayConfig>,
    /// Live session verifier for the route guard
    pub verifier: SessionVerifier,
}

impl GatewayState {
    /// Assemble state from loaded configuration
    pub fn new(config: GatewayConfig, verifier: SessionVerifier) -> Self {
        Self { config: Arc::new(config), verifier }
    }
}
