//! Group selection of accounts by explicit id or by tag.

use std::collections::BTreeSet;

use crate::types::{AccountId, AccountSummary};

/// Accounts chosen for a bulk operation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub accounts: BTreeSet<AccountId>,
    pub tags: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account_id: impl Into<AccountId>) -> Self {
        self.accounts.insert(account_id.into());
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        let tag = tag.trim();
        if !tag.is_empty() {
            self.tags.insert(tag.to_string());
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty() && self.tags.is_empty()
    }

    pub fn matches(&self, account: &AccountSummary) -> bool {
        self.accounts.contains(&account.account_id)
            || account.tags.iter().any(|tag| self.tags.contains(tag))
    }
}
