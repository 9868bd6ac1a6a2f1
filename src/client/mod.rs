//! Client Module
//!
//! The client-side half of the auth core: configuration, the typed wrappers
//! around the backend's identity endpoints, and the synchronization of their
//! results into the [`SessionStore`](crate::session::SessionStore).
//!
//! # Architecture
//!
//! - **`config`** - API base URL and request timeout
//! - **`types`** - Request/response DTOs and post-auth navigation targets
//! - **`error`** - `AuthError`
//! - **`auth`** - `AuthClient`: login, register, logout, identity fetch,
//!   password reset
//!
//! # Ownership of identity state
//!
//! `AuthClient` is the only writer of the session store. UI code reads the
//! store and executes the `NavTarget` values the client returns; it never
//! mutates identity state directly.

/// Client configuration
pub mod config;

/// Request/response types and navigation targets
pub mod types;

/// Client-side auth errors
pub mod error;

/// Auth query/mutation layer
pub mod auth;

// Re-export commonly used types
pub use auth::AuthClient;
pub use config::ClientConfig;
pub use error::AuthError;
pub use types::{LoginOutcome, LoginRequest, NavTarget, RegisterRequest};
