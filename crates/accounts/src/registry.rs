//! Deduplicated, display-ordered view over an [`AccountStore`].
//!
//! Every compound operation (add, remove, update) runs read-modify-write
//! inside one critical section and always re-reads the store right before
//! writing, so concurrent mutations never overwrite each other with a stale
//! snapshot.

use std::collections::HashMap;

use tokio::sync::{Mutex, broadcast};

use crate::error::{RegistryError, Result};
use crate::events::{AccountEvent, AccountEvents, DEFAULT_EVENT_CAPACITY};
use crate::list::AccountList;
use crate::ordering::sort_by_effective_name;
use crate::repository::AccountStore;
use crate::types::{
    AccountId, AccountRecord, AccountSummary, normalize_custom_name, normalize_tags,
};

/// The single writer of the account store.
pub struct AccountRegistry<S> {
    store: S,
    write_lock: Mutex<()>,
    events: AccountEvents,
}

impl<S: AccountStore> AccountRegistry<S> {
    pub fn new(store: S) -> Self {
        Self::with_event_capacity(store, DEFAULT_EVENT_CAPACITY)
    }

    pub fn with_event_capacity(store: S, capacity: usize) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
            events: AccountEvents::with_capacity(capacity),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Receive an [`AccountEvent::Loaded`] after every load and mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<AccountEvent> {
        self.events.subscribe()
    }

    /// Read, deduplicate, redact and sort the stored accounts.
    ///
    /// Storage errors are returned unchanged; see [`Self::load_or_empty`] for
    /// the degrade-to-empty policy.
    pub async fn load(&self) -> Result<AccountList> {
        let records = self.store.read_all().await?;
        let list = materialize(&dedup_last_wins(records));

        tracing::debug!("Loaded {} accounts", list.len());
        self.events.publish(AccountEvent::Loaded(list.clone()));

        Ok(list)
    }

    /// Like [`Self::load`], but an unavailable store yields an empty list.
    pub async fn load_or_empty(&self) -> AccountList {
        match self.load().await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(
                    "Account storage at {} unavailable, showing no accounts: {}",
                    self.store.location().display(),
                    e
                );
                let list = AccountList::empty();
                self.events.publish(AccountEvent::Loaded(list.clone()));
                list
            }
        }
    }

    /// Append a newly linked account.
    pub async fn add(&self, mut record: AccountRecord) -> Result<AccountSummary> {
        record.custom_display_name = normalize_custom_name(record.custom_display_name.take());
        record.tags = normalize_tags(std::mem::take(&mut record.tags));
        record.validate().map_err(RegistryError::InvalidRecord)?;

        let _guard = self.write_lock.lock().await;
        let mut records = self.read_for_update().await?;

        if records.iter().any(|r| r.account_id == record.account_id) {
            return Err(RegistryError::DuplicateAccount(record.account_id));
        }

        let summary = AccountSummary::from(&record);
        records.push(record);
        self.persist(&records).await?;

        tracing::info!("Linked account {}", summary.account_id);
        Ok(summary)
    }

    /// Remove an account by id.
    ///
    /// Returns whether a record was removed. Removing an unknown id is a
    /// no-op and does not write.
    pub async fn remove(&self, account_id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let records = self.read_for_update().await?;

        let before = records.len();
        let remaining: Vec<AccountRecord> = records
            .into_iter()
            .filter(|r| r.account_id.as_str() != account_id)
            .collect();

        if remaining.len() == before {
            tracing::debug!("Account {} not present, nothing to remove", account_id);
            return Ok(false);
        }

        self.persist(&remaining).await?;

        tracing::info!("Removed account {}", account_id);
        Ok(true)
    }

    /// Replace one record with the result of `f`.
    ///
    /// `f` gets the current record and must return a new one with the same id.
    pub async fn update<F>(&self, account_id: &str, f: F) -> Result<AccountSummary>
    where
        F: FnOnce(&AccountRecord) -> AccountRecord + Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_for_update().await?;

        let slot = records
            .iter_mut()
            .find(|r| r.account_id.as_str() == account_id)
            .ok_or_else(|| RegistryError::AccountNotFound(AccountId::new(account_id)))?;

        let updated = f(slot);
        if updated.account_id != slot.account_id {
            return Err(RegistryError::InvalidRecord(format!(
                "account id cannot change from {} to {}",
                slot.account_id, updated.account_id
            )));
        }
        updated.validate().map_err(RegistryError::InvalidRecord)?;

        let summary = AccountSummary::from(&updated);
        *slot = updated;
        self.persist(&records).await?;

        tracing::info!("Updated account {}", account_id);
        Ok(summary)
    }

    /// Set or clear the user's name override. Blank names clear it.
    pub async fn set_custom_display_name(
        &self,
        account_id: &str,
        name: Option<String>,
    ) -> Result<AccountSummary> {
        let name = normalize_custom_name(name);

        self.update(account_id, move |current| AccountRecord {
            custom_display_name: name,
            ..current.clone()
        })
        .await
    }

    /// Replace the account's tags.
    pub async fn set_tags<I, T>(&self, account_id: &str, tags: I) -> Result<AccountSummary>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let tags = normalize_tags(tags);

        self.update(account_id, move |current| AccountRecord {
            tags,
            ..current.clone()
        })
        .await
    }

    /// Freshest stored records; a store that was never written counts as empty.
    async fn read_for_update(&self) -> Result<Vec<AccountRecord>> {
        match self.store.read_all().await {
            Ok(records) => Ok(dedup_last_wins(records)),
            Err(e) if e.is_missing() => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, records: &[AccountRecord]) -> Result<()> {
        self.store.replace_all(records).await?;
        self.events.publish(AccountEvent::Loaded(materialize(records)));
        Ok(())
    }
}

/// Collapse records sharing an id.
///
/// The last record wins; it takes the position of the first occurrence.
pub fn dedup_last_wins(records: Vec<AccountRecord>) -> Vec<AccountRecord> {
    let mut positions: HashMap<AccountId, usize> = HashMap::with_capacity(records.len());
    let mut unique: Vec<AccountRecord> = Vec::with_capacity(records.len());

    for record in records {
        match positions.get(&record.account_id) {
            Some(&position) => {
                tracing::warn!("Duplicate account {} in storage", record.account_id);
                if let Some(slot) = unique.get_mut(position) {
                    *slot = record;
                }
            }
            None => {
                positions.insert(record.account_id.clone(), unique.len());
                unique.push(record);
            }
        }
    }

    unique
}

fn materialize(records: &[AccountRecord]) -> AccountList {
    let summaries = records.iter().map(AccountSummary::from).collect();
    AccountList::from_sorted(sort_by_effective_name(summaries))
}
