//! Gateway Middleware Module
//!
//! Request-processing middleware for the edge gateway.
//!
//! - **`guard`** - The route guard: decides, per request, whether a
//!   protected path may render
//! - **`headers`** - Static hardening response headers

/// Route guard middleware
pub mod guard;

/// Security response headers
pub mod headers;

pub use guard::{route_guard, DenialReason, GuardDecision};
