//! Gateway Module
//!
//! The edge half of the auth core: an axum service that sits in front of
//! the page-rendering app and authorizes access to the staff management
//! area before anything renders.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, shared state, app assembly
//! - **`verify`** - Live session verification against the auth backend
//! - **`middleware`** - The route guard and the hardening response headers
//! - **`routes`** - Router assembly (health, page shell, guard layer)
//! - **`error`** - Gateway error types
//!
//! # Trust model
//!
//! The gateway never trusts client-held state. Every request under the
//! protected prefix is re-verified against the backend with the cookies the
//! browser sent; any ambiguity (missing cookie, backend error, timeout)
//! denies access. Each request is self-contained - the gateway keeps no
//! per-request shared mutable state.
//!
//! This module is only compiled when the `gateway` feature is enabled.

/// Server setup and configuration
pub mod server;

/// Session verification against the auth backend
pub mod verify;

/// Route guard and security headers
pub mod middleware;

/// Router assembly
pub mod routes;

/// Gateway error types
pub mod error;

// Re-export commonly used types
pub use error::GatewayError;
pub use middleware::guard::{DenialReason, GuardDecision};
pub use server::config::GatewayConfig;
pub use server::init::create_app;
pub use verify::{SessionCookies, SessionVerifier};
