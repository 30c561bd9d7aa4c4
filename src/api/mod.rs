//! HTTP API layer for Image Guard.
//!
//! Exposes the verifier to HTTP clients and to adapters that forward whole
//! request records.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
pub use types::*;
