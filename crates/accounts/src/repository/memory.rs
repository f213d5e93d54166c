//! In-memory AccountStore implementation.

use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::AccountStore;
use crate::error::{StoreError, UnavailableCause};
use crate::types::AccountRecord;

const LOCATION: &str = ":memory:";

/// Process-local store, used by tests and embedders without a data directory.
///
/// Each call yields to the scheduler once before touching state, the way a
/// real file operation would suspend.
#[derive(Debug, Default)]
pub struct InMemoryAccountStore {
    records: RwLock<Option<Vec<AccountRecord>>>,
    fail_writes: AtomicBool,
}

impl InMemoryAccountStore {
    /// A store that has never been written; reads report it as missing.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AccountRecord>) -> Self {
        Self {
            records: RwLock::new(Some(records)),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// Make subsequent `replace_all` calls fail without touching state.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn read_all(&self) -> Result<Vec<AccountRecord>, StoreError> {
        tokio::task::yield_now().await;

        self.records
            .read()
            .await
            .clone()
            .ok_or_else(|| StoreError::unavailable(Path::new(LOCATION), UnavailableCause::Missing))
    }

    async fn replace_all(&self, records: &[AccountRecord]) -> Result<(), StoreError> {
        tokio::task::yield_now().await;

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::write_failed(
                Path::new(LOCATION),
                std::io::Error::other("writes disabled"),
            ));
        }

        *self.records.write().await = Some(records.to_vec());
        Ok(())
    }

    fn location(&self) -> &Path {
        Path::new(LOCATION)
    }
}
