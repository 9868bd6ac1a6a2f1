/**
 * Router Configuration
 *
 * Builds the gateway router. Every route - the health endpoint and the
 * app-shell fallback alike - sits behind the route guard, which decides
 * per request whether a protected path may render. Request tracing wraps
 * the whole stack.
 */

use axum::middleware;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::gateway::middleware::guard::route_guard;
use crate::gateway::server::state::GatewayState;

/// The single-page shell served for every page route
///
/// Client-side routing takes over in the browser; the gateway's job ends
/// at authorizing the request and serving the shell.
const APP_SHELL: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>Innkeep</title></head>\n<body><div id=\"app\"></div></body>\n</html>\n";

/// Create the gateway router
///
/// Routes:
/// - `GET /healthz` - liveness probe
/// - everything else - the app shell, gated by the route guard for paths
///   under the protected prefix
pub fn create_router(state: GatewayState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .fallback(app_shell)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn_with_state(state.clone(), route_guard)),
        )
        .with_state(state)
}

/// Liveness probe
async fn healthz() -> &'static str {
    "ok"
}

/// Serve the single-page shell
async fn app_shell() -> Html<&'static str> {
    Html(APP_SHELL)
}
