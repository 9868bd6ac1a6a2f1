/**
 * Session Verification
 *
 * Live verification of a browser session against the auth backend. The
 * gateway forwards the request's `sessionid` / `csrftoken` cookies to
 * `GET /auth/me/` and deserializes the identity the backend reports.
 *
 * # Freshness
 *
 * Verification is always live: the request carries `Cache-Control:
 * no-store` and no verification result is ever reused across requests. A
 * transient backend outage therefore degrades to "logged out" for the
 * affected navigations instead of serving a stale grant.
 */

use std::time::Duration;

use axum::http::HeaderMap;
use reqwest::{header, Client};
use thiserror::Error;

use crate::identity::user::SessionUser;

/// Name of the backend's session cookie
pub const SESSION_COOKIE: &str = "sessionid";

/// Name of the backend's CSRF cookie
pub const CSRF_COOKIE: &str = "csrftoken";

/// Errors from a verification attempt
///
/// The route guard treats every variant as a denial; the distinction only
/// matters for logging.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Transport failure, timeout, or an undecodable body
    #[error("verification request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("auth backend answered {0}")]
    Unauthenticated(u16),
}

/// Session cookie pair extracted from an incoming request
///
/// Both cookies are backend-issued; the gateway only reads and forwards
/// them, never mints or rewrites them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookies {
    /// Opaque session token
    pub session_id: String,
    /// Anti-forgery token, when present
    pub csrf_token: Option<String>,
}

impl SessionCookies {
    /// Extract the session cookie pair from request headers
    ///
    /// Returns `None` when no `sessionid` cookie exists - the guard denies
    /// such requests without any network call.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let mut session_id = None;
        let mut csrf_token = None;

        for value in headers.get_all(axum::http::header::COOKIE) {
            let Ok(raw) = value.to_str() else { continue };
            for pair in raw.split(';') {
                let Some((name, value)) = pair.trim().split_once('=') else { continue };
                match name {
                    SESSION_COOKIE => session_id = Some(value.to_string()),
                    CSRF_COOKIE => csrf_token = Some(value.to_string()),
                    _ => {}
                }
            }
        }

        session_id.map(|session_id| Self { session_id, csrf_token })
    }

    /// Serialize the pair back into a `Cookie` header value
    fn header_value(&self) -> String {
        match &self.csrf_token {
            Some(csrf) => format!("{}={}; {}={}", SESSION_COOKIE, self.session_id, CSRF_COOKIE, csrf),
            None => format!("{}={}", SESSION_COOKIE, self.session_id),
        }
    }
}

/// Client for live session verification against the auth backend
#[derive(Debug, Clone)]
pub struct SessionVerifier {
    http: Client,
    me_url: String,
}

impl SessionVerifier {
    /// Build a verifier for the given backend
    ///
    /// The client carries no cookie jar: cookies are forwarded explicitly
    /// per request, so concurrent verifications cannot bleed into each
    /// other.
    pub fn new(backend_url: &str, timeout: Duration) -> Result<Self, VerifyError> {
        let http = Client::builder().timeout(timeout).build()?;
        let me_url = format!("{}/auth/me/", backend_url.trim_end_matches('/'));
        Ok(Self { http, me_url })
    }

    /// Verify a session and return the identity the backend reports
    ///
    /// # Errors
    ///
    /// * `Unauthenticated` - backend answered non-2xx (expired or bogus
    ///   session)
    /// * `Transport` - network error, timeout, or a body that does not
    ///   decode as an identity record
    pub async fn verify(&self, cookies: &SessionCookies) -> Result<SessionUser, VerifyError> {
        let response = self
            .http
            .get(&self.me_url)
            .header(header::COOKIE, cookies.header_value())
            .header(header::CACHE_CONTROL, "no-store")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(VerifyError::Unauthenticated(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::header::COOKIE;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, value.parse().unwrap());
        headers
    }

    #[test]
    fn test_extracts_session_and_csrf() {
        let headers = headers_with_cookie("csrftoken=abc123; sessionid=s3cr3t; theme=dark");
        let cookies = SessionCookies::from_headers(&headers).unwrap();
        assert_eq!(cookies.session_id, "s3cr3t");
        assert_eq!(cookies.csrf_token.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_session_cookie_alone_is_enough() {
        let headers = headers_with_cookie("sessionid=s3cr3t");
        let cookies = SessionCookies::from_headers(&headers).unwrap();
        assert_eq!(cookies.session_id, "s3cr3t");
        assert!(cookies.csrf_token.is_none());
    }

    #[test]
    fn test_missing_session_cookie_yields_none() {
        let headers = headers_with_cookie("csrftoken=abc123; theme=dark");
        assert!(SessionCookies::from_headers(&headers).is_none());
        assert!(SessionCookies::from_headers(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_header_value_round_trip() {
        let cookies = SessionCookies {
            session_id: "s3cr3t".to_string(),
            csrf_token: Some("abc123".to_string()),
        };
        assert_eq!(cookies.header_value(), "sessionid=s3cr3t; csrftoken=abc123");

        let bare = SessionCookies { session_id: "s3cr3t".to_string(), csrf_token: None };
        assert_eq!(bare.header_value(), "sessionid=s3cr3t");
    }
}
