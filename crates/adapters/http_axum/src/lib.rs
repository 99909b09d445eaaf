//! # ledgerhub-adapter-http-axum
//!
//! Thin HTTP transport for the registry: a single invoke endpoint feeding
//! the name-based dispatcher, plus a health check. The transport decodes
//! nothing itself beyond the invocation envelope — operation semantics,
//! argument decoding, and failure kinds all live below this layer.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
