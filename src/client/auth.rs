/**
 * Auth Query/Mutation Layer
 *
 * Bridges the session store to the backend's identity endpoints and owns
 * every network-triggered identity transition. Nothing else writes the
 * store.
 *
 * # State discipline
 *
 * Login and register only touch the store after the backend confirms; a
 * rejected mutation leaves the session exactly as it was. Logout is the one
 * exception: local state clears before the backend call, since failing to
 * log out locally is a worse failure mode than a stale server session.
 *
 * # Cookies and CSRF
 *
 * The `sessionid` and `csrftoken` cookies are backend-issued; this client
 * stores them in its cookie jar and forwards them. Mutating requests echo
 * the CSRF cookie in the `X-CSRFToken` header.
 *
 * # Stale responses
 *
 * The identity fetch captures the store epoch before the request and applies
 * the result through `SessionStore::sync_user`, so a response that lost the
 * race against a logout (or a newer login) is discarded instead of reviving
 * dead state.
 */

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, RequestBuilder, Response, Url};

use crate::client::config::ClientConfig;
use crate::client::error::AuthError;
use crate::client::types::{
    AuthPayload, LoginOutcome, LoginRequest, NavTarget, PasswordResetConfirmRequest,
    PasswordResetRequest, RegisterRequest,
};
use crate::identity::user::SessionUser;
use crate::session::store::SessionStore;

/// Name of the backend's CSRF cookie
const CSRF_COOKIE: &str = "csrftoken";

/// Header that echoes the CSRF cookie on mutating requests
const CSRF_HEADER: &str = "X-CSRFToken";

/// Typed client for the backend's identity endpoints
///
/// Holds the session store it synchronizes and a cookie jar carrying the
/// backend-issued session cookies.
pub struct AuthClient {
    config: ClientConfig,
    store: Arc<SessionStore>,
    http: Client,
    jar: Arc<Jar>,
}

impl AuthClient {
    /// Build a client around an existing session store
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Network` if the underlying HTTP client cannot be
    /// constructed (TLS backend initialization, essentially).
    pub fn new(config: ClientConfig, store: Arc<SessionStore>) -> Result<Self, AuthError> {
        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .cookie_provider(jar.clone())
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self { config, store, http, jar })
    }

    /// The session store this client synchronizes
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Fetch the current identity and synchronize the store
    ///
    /// `GET /auth/me/`. Success writes the user into the store; any failure
    /// (a 401 included) writes `None` - no retry, a failed fetch means
    /// "logged out". Either write goes through the epoch check, so a result
    /// arriving after a concurrent logout is dropped.
    ///
    /// Returns the user if one was fetched and applied.
    pub async fn fetch_current_user(&self) -> Option<SessionUser> {
        let epoch = self.store.epoch();

        match self.request_me().await {
            Ok(user) => {
                if self.store.sync_user(epoch, Some(user.clone())) {
                    Some(user)
                } else {
                    tracing::debug!("Discarding stale identity fetch result");
                    None
                }
            }
            Err(err) => {
                tracing::debug!("Identity fetch failed, treating as logged out: {}", err);
                self.store.sync_user(epoch, None);
                None
            }
        }
    }

    /// Authenticate with credentials
    ///
    /// `POST /auth/login/`. On success the store is updated and the outcome
    /// carries the navigation target (staff area for team members and super
    /// admins, guest dashboard otherwise). On failure the store is left
    /// untouched and the error is surfaced for the credentials form.
    pub async fn login(&self, credentials: LoginRequest) -> Result<LoginOutcome, AuthError> {
        let response = self
            .mutating(self.config.api_url("/auth/login/"))
            .json(&credentials)
            .send()
            .await?;
        let payload = Self::read_auth_payload(response).await?;

        tracing::info!("Logged in as {}", payload.user.email);
        self.store.set_user(Some(payload.user.clone()));

        let destination = NavTarget::after_login(&payload.user);
        Ok(LoginOutcome { user: payload.user, destination })
    }

    /// Create an account
    ///
    /// `POST /auth/register/`. Structurally identical to [`login`], but a
    /// freshly created account always routes to the guest dashboard.
    ///
    /// [`login`]: AuthClient::login
    pub async fn register(&self, details: RegisterRequest) -> Result<LoginOutcome, AuthError> {
        let response = self
            .mutating(self.config.api_url("/auth/register/"))
            .json(&details)
            .send()
            .await?;
        let payload = Self::read_auth_payload(response).await?;

        tracing::info!("Registered account for {}", payload.user.email);
        self.store.set_user(Some(payload.user.clone()));

        Ok(LoginOutcome { user: payload.user, destination: NavTarget::GuestDashboard })
    }

    /// Log out
    ///
    /// Clears the store first - local logout must not depend on the network
    /// outcome - then tells the backend to close the server-side session. A
    /// backend failure is logged and swallowed.
    ///
    /// Returns the public home page as the navigation target.
    pub async fn logout(&self) -> NavTarget {
        self.store.logout();

        match self.mutating(self.config.api_url("/auth/logout/")).send().await {
            Ok(response) if response.status().is_success() => {
                tracing::info!("Backend session closed");
            }
            Ok(response) => {
                tracing::warn!("Backend logout rejected: {}", response.status());
            }
            Err(err) => {
                tracing::warn!("Backend logout failed: {}", err);
            }
        }

        NavTarget::Home
    }

    /// Request a password-reset email
    ///
    /// `POST /auth/password-reset/`. Plain form-to-endpoint glue; does not
    /// touch session state.
    pub async fn request_password_reset(&self, email: impl Into<String>) -> Result<(), AuthError> {
        let request = PasswordResetRequest { email: email.into() };
        let response = self
            .mutating(self.config.api_url("/auth/password-reset/"))
            .json(&request)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    /// Confirm a password reset with the emailed token
    ///
    /// `POST /auth/password-reset/confirm/`.
    pub async fn confirm_password_reset(
        &self,
        token: impl Into<String>,
        new_password: impl Into<String>,
    ) -> Result<(), AuthError> {
        let request = PasswordResetConfirmRequest {
            token: token.into(),
            new_password: new_password.into(),
        };
        let response = self
            .mutating(self.config.api_url("/auth/password-reset/confirm/"))
            .json(&request)
            .send()
            .await?;
        Self::expect_success(response).await
    }

    async fn request_me(&self) -> Result<SessionUser, AuthError> {
        let response = self.http.get(self.config.api_url("/auth/me/")).send().await?;
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    /// POST builder with the CSRF cookie echoed as a header
    fn mutating(&self, url: String) -> RequestBuilder {
        let mut builder = self.http.post(url);
        if let Some(token) = self.csrf_token() {
            builder = builder.header(CSRF_HEADER, token);
        }
        builder
    }

    /// Current CSRF token from the cookie jar, if the backend issued one
    fn csrf_token(&self) -> Option<String> {
        let url = Url::parse(self.config.base_url()).ok()?;
        let cookies = self.jar.cookies(&url)?;
        let cookies = cookies.to_str().ok()?;
        cookies
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == CSRF_COOKIE)
            .map(|(_, value)| value.to_string())
    }

    async fn read_auth_payload(response: Response) -> Result<AuthPayload, AuthError> {
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn expect_success(response: Response) -> Result<(), AuthError> {
        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }
        Ok(())
    }

    /// Turn a non-2xx response into a form-renderable rejection
    ///
    /// Prefers the backend's JSON `detail` field, falls back to the raw body.
    async fn rejection(response: Response) -> AuthError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or(body);
        AuthError::Rejected { status, message }
    }
}
