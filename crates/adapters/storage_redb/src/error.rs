//! Storage-specific error type wrapping redb errors.

use ledgerhub_domain::error::LedgerHubError;

/// Errors originating from the redb storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Failed to open or create the database file.
    #[error("failed to open the database")]
    Open(#[from] redb::DatabaseError),

    /// Failed to begin a transaction.
    #[error("failed to begin a transaction")]
    Transaction(#[from] redb::TransactionError),

    /// Failed to open the registry table.
    #[error("failed to open the registry table")]
    Table(#[from] redb::TableError),

    /// Failed to commit a write transaction.
    #[error("failed to commit a transaction")]
    Commit(#[from] redb::CommitError),

    /// A read or write inside a transaction failed.
    #[error("storage operation failed")]
    Storage(#[from] redb::StorageError),
}

impl From<StorageError> for LedgerHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
