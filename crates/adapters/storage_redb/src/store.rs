//! `redb`-backed [`KeyedStore`].

use std::path::Path;
use std::sync::Arc;

use redb::{Database, ReadableTable, TableDefinition};

use ledgerhub_app::ports::{KeyedStore, LedgerEntry, ScanCursor};
use ledgerhub_domain::error::LedgerHubError;
use ledgerhub_domain::key::{CompositeKey, KeyPrefix};

use crate::error::StorageError;

/// Single table holding every composite-keyed record.
const REGISTRY_TABLE: TableDefinition<&[u8], &[u8]> = TableDefinition::new("registry");

/// Persistent ledger backed by a redb database file.
///
/// Cloning shares the same database handle, like a connection pool.
#[derive(Debug, Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl RedbStore {
    /// Open (or create) the database at `path`.
    ///
    /// The registry table is created up front so that read transactions
    /// never observe a missing table.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the file cannot be opened or the
    /// initial transaction fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = Database::create(path)?;
        let txn = db.begin_write()?;
        {
            let _table = txn.open_table(REGISTRY_TABLE)?;
        }
        txn.commit()?;
        Ok(Self { db: Arc::new(db) })
    }

    fn read_value(&self, key: &CompositeKey) -> Result<Option<Vec<u8>>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(REGISTRY_TABLE)?;
        let value = table.get(key.as_bytes())?.map(|guard| guard.value().to_vec());
        Ok(value)
    }

    fn write_value(&self, key: &CompositeKey, value: &[u8]) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(REGISTRY_TABLE)?;
            table.insert(key.as_bytes(), value)?;
        }
        txn.commit()?;
        Ok(())
    }

    fn remove_value(&self, key: &CompositeKey) -> Result<(), StorageError> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(REGISTRY_TABLE)?;
            table.remove(key.as_bytes())?;
        }
        txn.commit()?;
        Ok(())
    }

    fn snapshot_prefix(&self, prefix: &KeyPrefix) -> Result<Vec<LedgerEntry>, StorageError> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(REGISTRY_TABLE)?;
        let mut entries = Vec::new();
        for item in table.range(prefix.as_bytes()..)? {
            let (key, value) = item?;
            if !prefix.matches(key.value()) {
                break;
            }
            entries.push(LedgerEntry {
                key: key.value().to_vec(),
                value: value.value().to_vec(),
            });
        }
        Ok(entries)
    }
}

/// Cursor over a snapshot taken within one read transaction.
pub struct RedbScan {
    entries: std::vec::IntoIter<LedgerEntry>,
}

impl ScanCursor for RedbScan {
    fn next_entry(&mut self) -> Result<Option<LedgerEntry>, LedgerHubError> {
        Ok(self.entries.next())
    }
}

impl KeyedStore for RedbStore {
    type Scan = RedbScan;

    async fn get(&self, key: CompositeKey) -> Result<Option<Vec<u8>>, LedgerHubError> {
        Ok(self.read_value(&key)?)
    }

    async fn put(&self, key: CompositeKey, value: Vec<u8>) -> Result<(), LedgerHubError> {
        Ok(self.write_value(&key, &value)?)
    }

    async fn delete(&self, key: CompositeKey) -> Result<(), LedgerHubError> {
        Ok(self.remove_value(&key)?)
    }

    async fn scan_prefix(&self, prefix: KeyPrefix) -> Result<Self::Scan, LedgerHubError> {
        let entries = self.snapshot_prefix(&prefix)?;
        Ok(RedbScan {
            entries: entries.into_iter(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(id: &str) -> CompositeKey {
        CompositeKey::new("Device", &[id])
    }

    fn temp_store() -> (tempfile::TempDir, RedbStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = RedbStore::open(dir.path().join("test.redb")).unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn should_return_none_for_absent_key() {
        let (_dir, store) = temp_store();
        assert!(store.get(key("1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_roundtrip_put_and_get() {
        let (_dir, store) = temp_store();
        store.put(key("1"), b"value".to_vec()).await.unwrap();
        assert_eq!(store.get(key("1")).await.unwrap(), Some(b"value".to_vec()));
    }

    #[tokio::test]
    async fn should_overwrite_on_second_put() {
        let (_dir, store) = temp_store();
        store.put(key("1"), b"old".to_vec()).await.unwrap();
        store.put(key("1"), b"new".to_vec()).await.unwrap();
        assert_eq!(store.get(key("1")).await.unwrap(), Some(b"new".to_vec()));
    }

    #[tokio::test]
    async fn should_remove_key_on_delete() {
        let (_dir, store) = temp_store();
        store.put(key("1"), b"value".to_vec()).await.unwrap();
        store.delete(key("1")).await.unwrap();
        assert!(store.get(key("1")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_tolerate_deleting_absent_key() {
        let (_dir, store) = temp_store();
        store.delete(key("ghost")).await.unwrap();
    }

    #[tokio::test]
    async fn should_scan_only_keys_under_the_prefix() {
        let (_dir, store) = temp_store();
        store.put(key("1"), b"a".to_vec()).await.unwrap();
        store.put(key("2"), b"b".to_vec()).await.unwrap();
        store
            .put(CompositeKey::new("Sensor", &["1"]), b"x".to_vec())
            .await
            .unwrap();

        let mut scan = store
            .scan_prefix(KeyPrefix::namespace("Device"))
            .await
            .unwrap();
        let mut values = Vec::new();
        while let Some(entry) = scan.next_entry().unwrap() {
            values.push(entry.value);
        }
        assert_eq!(values, vec![b"a".to_vec(), b"b".to_vec()]);
    }

    #[tokio::test]
    async fn should_persist_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.redb");

        {
            let store = RedbStore::open(&path).unwrap();
            store.put(key("1"), b"value".to_vec()).await.unwrap();
        }

        let store = RedbStore::open(&path).unwrap();
        assert_eq!(store.get(key("1")).await.unwrap(), Some(b"value".to_vec()));
    }
}
