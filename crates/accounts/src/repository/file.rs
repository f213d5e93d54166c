//! File-based AccountStore implementation.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{AccountStore, AccountsFile, AccountsFileRef};
use crate::error::{StoreError, UnavailableCause};
use crate::types::AccountRecord;

/// Stores all accounts in a single pretty-printed JSON file.
///
/// # Atomicity
///
/// Writes go to a sibling `<name>.tmp` file which is flushed to disk and then
/// renamed over the target, so readers see either the old or the new file.
#[derive(Debug, Clone)]
pub struct FileAccountStore {
    path: PathBuf,
}

impl FileAccountStore {
    /// Create a store backed by `path`, creating its parent directory.
    pub fn new(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("accounts"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
        let mut file = fs::File::create(path).await?;
        file.write_all(bytes).await?;
        file.sync_all().await
    }
}

#[async_trait]
impl AccountStore for FileAccountStore {
    async fn read_all(&self) -> Result<Vec<AccountRecord>, StoreError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::unavailable(
                    &self.path,
                    UnavailableCause::Missing,
                ));
            }
            Err(e) => {
                return Err(StoreError::unavailable(
                    &self.path,
                    UnavailableCause::Unreadable(e),
                ));
            }
        };

        let file: AccountsFile = serde_json::from_slice(&bytes)
            .map_err(|e| StoreError::unavailable(&self.path, UnavailableCause::Malformed(e)))?;

        tracing::debug!(
            "Read {} account records from {}",
            file.accounts.len(),
            self.path.display()
        );

        Ok(file.accounts)
    }

    async fn replace_all(&self, records: &[AccountRecord]) -> Result<(), StoreError> {
        let json = serde_json::to_vec_pretty(&AccountsFileRef { accounts: records })
            .map_err(|e| StoreError::write_failed(&self.path, std::io::Error::other(e)))?;

        let temp_path = self.temp_path();

        // Write to temp file
        if let Err(e) = Self::write_synced(&temp_path, &json).await {
            if fs::remove_file(&temp_path).await.is_err() {
                tracing::trace!("No temp file to clean up at {}", temp_path.display());
            }
            return Err(StoreError::write_failed(&self.path, e));
        }

        // Atomic rename
        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            if fs::remove_file(&temp_path).await.is_err() {
                tracing::warn!("Failed to remove temp file {}", temp_path.display());
            }
            return Err(StoreError::write_failed(&self.path, e));
        }

        tracing::debug!(
            "Wrote {} account records to {}",
            records.len(),
            self.path.display()
        );

        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Provider, Token};
    use tempfile::TempDir;

    fn record(id: &str, name: &str) -> AccountRecord {
        AccountRecord::new(id, name, Provider::Epic, Token::new(format!("token-{id}")))
    }

    #[tokio::test]
    async fn missing_file_is_reported_as_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAccountStore::new(temp_dir.path().join("accounts.json")).unwrap();

        let err = store.read_all().await.unwrap_err();
        assert!(err.is_missing());
    }

    #[tokio::test]
    async fn malformed_file_is_unavailable() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        std::fs::write(&path, "{ not json").unwrap();
        let store = FileAccountStore::new(&path).unwrap();

        let err = store.read_all().await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::StorageUnavailable {
                cause: UnavailableCause::Malformed(_),
                ..
            }
        ));
    }

    #[tokio::test]
    async fn empty_object_reads_as_no_accounts() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("accounts.json");
        std::fs::write(&path, "{}").unwrap();
        let store = FileAccountStore::new(&path).unwrap();

        assert!(store.read_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn replace_then_read_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAccountStore::new(temp_dir.path().join("nested/accounts.json")).unwrap();

        let records = vec![
            record("1", "One").with_tags(["farm"]),
            record("2", "Two").with_custom_display_name("Second"),
        ];
        store.replace_all(&records).await.unwrap();

        let mut read = store.read_all().await.unwrap();
        read.sort_by(|a, b| a.account_id.cmp(&b.account_id));
        assert_eq!(read, records);
        assert!(!store.temp_path().exists());
    }

    #[tokio::test]
    async fn file_uses_camel_case_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAccountStore::new(temp_dir.path().join("accounts.json")).unwrap();
        store
            .replace_all(&[record("1", "One").with_custom_display_name("Main")])
            .await
            .unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &json["accounts"][0];
        assert_eq!(first["accountId"], "1");
        assert_eq!(first["displayName"], "One");
        assert_eq!(first["customDisplayName"], "Main");
        assert_eq!(first["provider"], "epic");
        assert_eq!(first["token"], "token-1");
    }

    #[tokio::test]
    async fn failed_write_keeps_previous_state() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileAccountStore::new(temp_dir.path().join("accounts.json")).unwrap();
        store.replace_all(&[record("1", "One")]).await.unwrap();

        // A directory squatting on the temp path makes the write fail
        std::fs::create_dir(store.temp_path()).unwrap();

        let err = store
            .replace_all(&[record("2", "Two")])
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::StorageWriteFailed { .. }));

        let read = store.read_all().await.unwrap();
        assert_eq!(read, vec![record("1", "One")]);
    }
}
