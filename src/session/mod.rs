//! Session Module
//!
//! In-memory session state for the client side of the PMS front end: the
//! current user, the derived authentication flag, and the granted permission
//! set, plus the capability-check predicates every UI component gates on.
//!
//! The store is an explicit container, not a process-wide singleton; each
//! consumer (and each test) constructs its own instance and hands it to the
//! auth layer. All fallibility lives in the layer that feeds the store - the
//! store itself has no error conditions.

/// Session state container and permission predicates
pub mod store;

// Re-export commonly used types
pub use store::SessionStore;
