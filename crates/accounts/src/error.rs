//! Error types raised by account stores and the registry.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::types::AccountId;

/// Errors surfaced by [`AccountStore`](crate::AccountStore) implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("account storage unavailable at {}", path.display())]
    StorageUnavailable {
        path: PathBuf,
        #[source]
        cause: UnavailableCause,
    },

    #[error("failed to write account storage at {}", path.display())]
    StorageWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why the durable account state could not be read.
#[derive(Debug, Error)]
pub enum UnavailableCause {
    #[error("account file does not exist")]
    Missing,

    #[error("account file could not be read")]
    Unreadable(#[source] std::io::Error),

    #[error("account file is malformed")]
    Malformed(#[source] serde_json::Error),
}

impl StoreError {
    pub(crate) fn unavailable(path: &Path, cause: UnavailableCause) -> Self {
        StoreError::StorageUnavailable {
            path: path.to_path_buf(),
            cause,
        }
    }

    pub(crate) fn write_failed(path: &Path, source: std::io::Error) -> Self {
        StoreError::StorageWriteFailed {
            path: path.to_path_buf(),
            source,
        }
    }

    /// True when the store has simply never been written.
    ///
    /// Mutations treat a missing file as an empty store; unreadable or
    /// malformed files are never overwritten.
    pub fn is_missing(&self) -> bool {
        matches!(
            self,
            StoreError::StorageUnavailable {
                cause: UnavailableCause::Missing,
                ..
            }
        )
    }
}

/// Errors surfaced by [`AccountRegistry`](crate::AccountRegistry).
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("account {0} is already linked")]
    DuplicateAccount(AccountId),

    #[error("account {0} not found")]
    AccountNotFound(AccountId),

    #[error("invalid account record: {0}")]
    InvalidRecord(String),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
