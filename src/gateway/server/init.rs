/**
 * Gateway Initialization
 *
 * Assembles the axum application: builds the session verifier from the
 * configuration, wraps it in shared state, and hands everything to the
 * router.
 */

use axum::Router;

use crate::gateway::error::GatewayError;
use crate::gateway::routes::router::create_router;
use crate::gateway::server::config::GatewayConfig;
use crate::gateway::server::state::GatewayState;
use crate::gateway::verify::SessionVerifier;

/// Create the gateway application
///
/// # Errors
///
/// Fails only if the verification HTTP client cannot be constructed; all
/// request-time failures are handled inside the route guard.
pub fn create_app(config: GatewayConfig) -> Result<Router, GatewayError> {
    tracing::info!(
        "Initializing inngate gateway (backend {}, protected prefix {})",
        config.backend_url(),
        config.protected_prefix()
    );

    let verifier = SessionVerifier::new(config.backend_url(), config.verify_timeout())?;
    let state = GatewayState::new(config, verifier);

    Ok(create_router(state))
}
