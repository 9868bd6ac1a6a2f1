//! Identity Module
//!
//! This module defines the identity types shared between the client SDK and
//! the edge gateway, plus the vanity routing-identifier deriver.
//!
//! # Architecture
//!
//! - **`user`** - The `SessionUser` record as returned by `GET /auth/me/`
//! - **`routing_id`** - Deterministic per-user routing slug for vanity URLs
//!
//! Both sides of the system deserialize the same `SessionUser` wire format,
//! so there is exactly one place where the backend's identity shape is
//! spelled out.

/// User identity record and role descriptor
pub mod user;

/// Vanity routing-identifier derivation
pub mod routing_id;

// Re-export commonly used types
pub use user::{RoleInfo, SessionUser};
pub use routing_id::{generate_routing_id, verify_routing_id};
