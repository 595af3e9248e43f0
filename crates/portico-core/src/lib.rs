//! Shared HTTP plumbing for Portico services.
//!
//! Health handlers, request-id middleware, tracing setup, and response
//! serialization helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
