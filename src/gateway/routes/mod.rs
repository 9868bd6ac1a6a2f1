//! Gateway Routes Module
//!
//! Router assembly for the edge gateway: the health endpoint, the app
//! shell fallback, and the guard/trace layers.

/// Main router creation
pub mod router;

pub use router::create_router;
