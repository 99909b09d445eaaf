//! In-memory implementation of the [`KeyedStore`] port.
//!
//! An ordered map behind a mutex. Prefix scans snapshot the matching range
//! at open time, so a cursor stays consistent even if the map changes while
//! it is being drained. Intended for tests and ephemeral deployments; the
//! redb adapter is the persistent sibling.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use ledgerhub_app::ports::{KeyedStore, LedgerEntry, ScanCursor};
use ledgerhub_domain::error::LedgerHubError;
use ledgerhub_domain::key::{CompositeKey, KeyPrefix};

/// Ordered in-memory ledger.
///
/// Cloning is cheap and clones share the same underlying map, mirroring how
/// connection-pool handles behave in the persistent adapters.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<Vec<u8>, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<Vec<u8>, Vec<u8>>> {
        // A poisoned lock means a panic mid-operation; the map itself is
        // still a consistent snapshot of completed writes.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Cursor over a snapshot of the matching range.
pub struct MemoryScan {
    entries: std::vec::IntoIter<LedgerEntry>,
}

impl ScanCursor for MemoryScan {
    fn next_entry(&mut self) -> Result<Option<LedgerEntry>, LedgerHubError> {
        Ok(self.entries.next())
    }
}

impl KeyedStore for MemoryStore {
    type Scan = MemoryScan;

    async fn get(&self, key: CompositeKey) -> Result<Option<Vec<u8>>, LedgerHubError> {
        Ok(self.lock().get(key.as_bytes()).cloned())
    }

    async fn put(&self, key: CompositeKey, value: Vec<u8>) -> Result<(), LedgerHubError> {
        self.lock().insert(key.into_bytes(), value);
        Ok(())
    }

    async fn delete(&self, key: CompositeKey) -> Result<(), LedgerHubError> {
        self.lock().remove(key.as_bytes());
        Ok(())
    }

    async fn scan_prefix(&self, prefix: KeyPrefix) -> Result<Self::Scan, LedgerHubError> {
        let entries = self
            .lock()
            .range(prefix.as_bytes().to_vec()..)
            .take_while(|(key, _)| prefix.matches(key))
            .map(|(key, value)| LedgerEntry {
                key: key.clone(),
                value: value.clone(),
            })
            .collect::<Vec<_>>();
        Ok(MemoryScan {
            entries: entries.into_iter(),
        })
    }
}
