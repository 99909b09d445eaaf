//! Persistent `redb` implementation of the `KeyedStore` port.
//!
//! A single embedded database file with one byte-keyed table. Each port
//! call maps onto one redb transaction, which gives the atomic
//! succeed-or-fail semantics the registry assumes per invocation.

pub mod error;
mod store;

pub use error::StorageError;
pub use store::{RedbScan, RedbStore};
