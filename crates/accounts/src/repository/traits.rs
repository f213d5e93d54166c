//! Store contract shared by the file and in-memory implementations.

use std::path::Path;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::AccountRecord;

/// Whole-state access to the persisted account records.
///
/// No caching: every `read_all` observes the durable state at call time.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Load every stored record in storage order.
    ///
    /// Fails with [`StoreError::StorageUnavailable`] when the state is
    /// missing, unreadable, or malformed.
    async fn read_all(&self) -> Result<Vec<AccountRecord>, StoreError>;

    /// Atomically replace the stored records with `records`.
    ///
    /// On [`StoreError::StorageWriteFailed`] the previous state is left
    /// untouched; readers never observe a partial write.
    async fn replace_all(&self, records: &[AccountRecord]) -> Result<(), StoreError>;

    /// Where this store keeps its state, for diagnostics.
    fn location(&self) -> &Path;
}
