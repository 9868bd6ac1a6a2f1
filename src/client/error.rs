/**
 * Client-Side Auth Errors
 *
 * Error taxonomy for the auth query/mutation layer. Network failures and
 * backend rejections are the only two shapes a caller has to handle: the
 * credentials form renders `Rejected`, everything else is logged and treated
 * as "logged out".
 */

use thiserror::Error;

/// Errors from the auth client
#[derive(Debug, Error)]
pub enum AuthError {
    /// Transport, timeout or body-decoding failure talking to the backend
    #[error("network error talking to the auth backend: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend rejected the request (bad credentials, invalid payload)
    ///
    /// Carries the HTTP status and the backend-provided detail message so
    /// the credentials form can render it inline.
    #[error("auth backend rejected the request ({status}): {message}")]
    Rejected {
        /// HTTP status code of the rejection
        status: u16,
        /// Backend-provided detail, or the raw body if it was not JSON
        message: String,
    },
}

impl AuthError {
    /// True for rejections that should render as a form error rather than
    /// being logged as a transport problem
    pub fn is_rejection(&self) -> bool {
        matches!(self, AuthError::Rejected { .. })
    }
}
