/**
 * Route Guard Middleware
 *
 * Intercepts every request and authorizes access to the protected prefix
 * before the page renders. The decision is modeled as an explicit value
 * (`GuardDecision`) produced by a single evaluation function, so the
 * deny-on-any-ambiguity rule is checkable in one place instead of being
 * spread across nested conditionals.
 *
 * # Decision rules
 *
 * - Path outside the protected prefix: pass through, no check.
 * - No `sessionid` cookie: denied, without a network call.
 * - Backend verifies the session and reports a team member or super admin:
 *   granted.
 * - Backend verifies but the role is insufficient: denied.
 * - Backend unreachable, times out, or answers non-2xx: denied. Fail
 *   closed, never open. No retry - every navigation re-runs the guard, so
 *   a transient outage degrades to "logged out" rather than hanging.
 *
 * # Response headers
 *
 * Baseline hardening headers on everything; the strict set plus audit
 * headers (access time, per-request correlation id) on protected paths;
 * denial reason headers on redirects.
 */

use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderName, HeaderValue};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};

use crate::gateway::middleware::headers::{apply_baseline, apply_protected};
use crate::gateway::server::config::GatewayConfig;
use crate::gateway::server::state::GatewayState;
use crate::gateway::verify::{SessionCookies, SessionVerifier};
use crate::identity::user::SessionUser;

/// Why a protected request was denied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No session cookie, or the backend could not confirm the session
    NotAuthenticated,
    /// Valid session, but neither team member nor super admin
    InsufficientPermissions,
}

impl DenialReason {
    /// Value for the `X-Redirect-Reason` diagnostic header
    pub fn as_header_value(&self) -> &'static str {
        match self {
            DenialReason::NotAuthenticated => "not-authenticated",
            DenialReason::InsufficientPermissions => "insufficient-permissions",
        }
    }
}

/// Outcome of guarding one request
///
/// The pending-verification state of the underlying protocol is the await
/// point inside [`evaluate`]; it never escapes as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Path is outside the protected prefix; no check performed
    Public,
    /// Backend confirmed a sufficient role; request may proceed
    Granted {
        /// The verified identity, for logging/auditing
        user: SessionUser,
    },
    /// Request must be redirected to the login page
    Denied {
        /// Why access was refused
        reason: DenialReason,
    },
}

/// Evaluate the guard for one request path
///
/// Pure with respect to gateway state: reads configuration, optionally
/// performs the live verification call, and returns the decision.
pub async fn evaluate(
    config: &GatewayConfig,
    verifier: &SessionVerifier,
    path: &str,
    cookies: Option<SessionCookies>,
) -> GuardDecision {
    if !config.is_protected(path) {
        return GuardDecision::Public;
    }

    // No session cookie: deny without bothering the backend.
    let Some(cookies) = cookies else {
        return GuardDecision::Denied { reason: DenialReason::NotAuthenticated };
    };

    match verifier.verify(&cookies).await {
        Ok(user) if user.is_staff() => GuardDecision::Granted { user },
        Ok(user) => {
            tracing::info!("Role too low for {} (user {})", path, user.email);
            GuardDecision::Denied { reason: DenialReason::InsufficientPermissions }
        }
        Err(err) => {
            // Fail closed: any ambiguity reads as "not authenticated".
            tracing::warn!("Session verification failed for {}: {}", path, err);
            GuardDecision::Denied { reason: DenialReason::NotAuthenticated }
        }
    }
}

/// Axum middleware wrapping every gateway route
pub async fn route_guard(State(state): State<GatewayState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let cookies = SessionCookies::from_headers(request.headers());
    let decision = evaluate(&state.config, &state.verifier, &path, cookies).await;
    let protected = !matches!(decision, GuardDecision::Public);

    let mut response = match decision {
        GuardDecision::Public => next.run(request).await,
        GuardDecision::Granted { user } => {
            tracing::debug!("Management access granted to {} for {}", user.email, path);
            let mut response = next.run(request).await;
            stamp_grant(response.headers_mut());
            response
        }
        GuardDecision::Denied { reason } => {
            tracing::info!("Denied {} ({})", path, reason.as_header_value());
            denial_response(&state.config, &path, reason)
        }
    };

    apply_baseline(response.headers_mut());
    if protected {
        apply_protected(response.headers_mut());
    }
    response
}

/// Redirect to the login page, carrying the original path and the reason
fn denial_response(config: &GatewayConfig, path: &str, reason: DenialReason) -> Response {
    let location = format!("{}?redirect={}", config.login_path(), urlencoding::encode(path));
    let mut response = Redirect::temporary(&location).into_response();

    let headers = response.headers_mut();
    insert_static(headers, "x-auth-required", "true");
    insert_static(headers, "x-redirect-reason", reason.as_header_value());
    response
}

/// Audit headers for a granted request
///
/// The correlation id is freshly generated per request; two grants never
/// share one.
fn stamp_grant(headers: &mut HeaderMap) {
    insert_static(headers, "x-authenticated", "true");
    insert_str(headers, "x-pms-access-time", &chrono::Utc::now().to_rfc3339());
    insert_str(headers, "x-pms-session-id", &uuid::Uuid::new_v4().to_string());
}

fn insert_static(headers: &mut HeaderMap, name: &'static str, value: &'static str) {
    headers.insert(HeaderName::from_static(name), HeaderValue::from_static(value));
}

fn insert_str(headers: &mut HeaderMap, name: &'static str, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(HeaderName::from_static(name), value);
    }
}
