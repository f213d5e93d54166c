//! Durable storage of account records.
//!
//! The account file is the single source of truth. Stores expose whole-file
//! read and replace primitives only; the registry builds every other
//! operation on top of them.

mod file;
mod memory;
mod traits;

pub use file::FileAccountStore;
pub use memory::InMemoryAccountStore;
pub use traits::AccountStore;

use serde::{Deserialize, Serialize};

use crate::types::AccountRecord;

/// On-disk document: `{ "accounts": [...] }`.
#[derive(Debug, Default, Deserialize)]
struct AccountsFile {
    #[serde(default)]
    accounts: Vec<AccountRecord>,
}

#[derive(Serialize)]
struct AccountsFileRef<'a> {
    accounts: &'a [AccountRecord],
}
