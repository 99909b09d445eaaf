//! Ledger port — the transactional keyed store the registry writes to.
//!
//! Each method executes within one transactional context supplied by the
//! caller: a call either succeeds or fails atomically, and the port performs
//! no retries. Serialization of concurrent invocations is the store's
//! concern, not the registry's.

use std::future::Future;

use ledgerhub_domain::error::LedgerHubError;
use ledgerhub_domain::key::{CompositeKey, KeyPrefix};

/// One `(key, value)` pair yielded by a prefix scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerEntry {
    /// The full composite key bytes.
    pub key: Vec<u8>,
    /// The stored value bytes.
    pub value: Vec<u8>,
}

/// Cursor over the entries of a prefix scan.
///
/// The cursor owns whatever resources the scan acquired (snapshot, read
/// transaction, iterator) and releases them when dropped. Callers drain it
/// with [`ScanCursor::next_entry`] and may drop it early on any exit path;
/// release is tied to the value's lifetime, not to a close call.
pub trait ScanCursor {
    /// Advance the cursor, returning the next entry or `None` when drained.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerHubError::Storage`] when the underlying iteration
    /// fails; the cursor must not be advanced further afterwards.
    fn next_entry(&mut self) -> Result<Option<LedgerEntry>, LedgerHubError>;
}

/// Transactional keyed byte store with composite-key addressing.
///
/// Implementations map each call onto one atomic store operation. Values are
/// opaque bytes; key derivation lives in the domain layer
/// ([`CompositeKey`]), so adapters never interpret namespaces themselves.
pub trait KeyedStore {
    /// Cursor type produced by [`KeyedStore::scan_prefix`].
    type Scan: ScanCursor + Send;

    /// Point lookup; `None` when the key is absent.
    fn get(
        &self,
        key: CompositeKey,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, LedgerHubError>> + Send;

    /// Upsert `value` under `key`.
    fn put(
        &self,
        key: CompositeKey,
        value: Vec<u8>,
    ) -> impl Future<Output = Result<(), LedgerHubError>> + Send;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: CompositeKey) -> impl Future<Output = Result<(), LedgerHubError>> + Send;

    /// Open a cursor over every entry whose key starts with `prefix`, in
    /// store-iteration order.
    fn scan_prefix(
        &self,
        prefix: KeyPrefix,
    ) -> impl Future<Output = Result<Self::Scan, LedgerHubError>> + Send;
}
