//! # ledgerhub-domain
//!
//! Pure domain model for the ledgerhub device registry.
//!
//! ## Responsibilities
//! - Foundational types: the device identifier, timestamps, error conventions
//! - Define the **Device** record (the sole entity) and its validation rules
//! - Define **composite keys** — the addressing scheme the ledger uses for
//!   both point lookups and prefix scans
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod device;
pub mod error;
pub mod id;
pub mod key;
pub mod time;
