//! Inngate - Session/Permission Core for the Innkeep PMS Front End
//!
//! Inngate is the authentication core of a hospitality property-management
//! front end: the client-side session/permission model and the edge
//! route-guarding service that together gate access to the staff management
//! area. Pages, pricing, invoicing and the rest of the product live behind
//! a REST backend this crate talks to but does not implement.
//!
//! # Module Structure
//!
//! The library is organized into four modules:
//!
//! - **`identity`** - The `SessionUser` wire format shared by both sides,
//!   and the deterministic vanity routing-identifier deriver
//! - **`session`** - The in-memory session store: current user, derived
//!   auth flag, permission set, and the capability predicates (with the
//!   documented super-admin bypass)
//! - **`client`** - The auth query/mutation layer: login, register, logout,
//!   identity fetch and password reset against the backend, synchronizing
//!   results into the session store
//! - **`gateway`** - The axum edge service that re-verifies sessions
//!   against the backend before protected pages render (only compiled with
//!   the `gateway` feature)
//!
//! # Trust model
//!
//! Client-held state is a rendering convenience. The only authority for
//! access to server-rendered protected pages is the gateway's live,
//! per-request verification against the backend - which fails closed on
//! any ambiguity. The vanity routing identifier is cosmetic and never an
//! access-control input.
//!
//! # Feature Flags
//!
//! - **`gateway`** (default) - the axum edge service and its binary
//!   (`inngate-server`). Disable for client-SDK-only builds.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use inngate::client::{AuthClient, ClientConfig, LoginRequest};
//! use inngate::session::SessionStore;
//!
//! # async fn example() -> Result<(), inngate::client::AuthError> {
//! let store = Arc::new(SessionStore::new());
//! let client = AuthClient::new(ClientConfig::new(), store.clone())?;
//!
//! let outcome = client
//!     .login(LoginRequest {
//!         email: "anna@innkeep.example".into(),
//!         password: "secret".into(),
//!     })
//!     .await?;
//! assert!(store.is_authenticated());
//! // the embedding UI navigates to outcome.destination.path()
//! # Ok(())
//! # }
//! ```

/// Identity types and the routing-identifier deriver
pub mod identity;

/// In-memory session store and permission predicates
pub mod session;

/// Auth query/mutation layer (client SDK)
pub mod client;

/// Edge gateway (route guard service)
#[cfg(feature = "gateway")]
pub mod gateway;
