//! # ledgerhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`KeyedStore` port** that storage adapters implement
//!   (driven/outbound port): point reads, upserts, deletes, and prefix
//!   scans with a releasable cursor
//! - Define the **`DeviceRegistry`** use-cases: existence checks,
//!   validation gating, create/read/update/list, and identity transfer
//! - Define the **`Dispatcher`** — the name-based command interface the
//!   transport layer drives
//!
//! ## Dependency rule
//! Depends on `ledgerhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod dispatch;
pub mod ports;
pub mod services;
