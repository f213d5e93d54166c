//! Ordered, id-keyed snapshot of the registry handed to presentation.

use std::collections::{BTreeSet, HashMap};

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::selection::Selection;
use crate::types::{AccountId, AccountSummary};

/// Redacted accounts in display order, with lookup by id.
///
/// Serializes as a JSON object keyed by account id whose entries appear in
/// display order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountList {
    accounts: Vec<AccountSummary>,
    index: HashMap<AccountId, usize>,
}

impl AccountList {
    /// Wraps accounts that are already unique by id and in display order.
    pub(crate) fn from_sorted(accounts: Vec<AccountSummary>) -> Self {
        let index = accounts
            .iter()
            .enumerate()
            .map(|(position, account)| (account.account_id.clone(), position))
            .collect();
        Self { accounts, index }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get(&self, account_id: &str) -> Option<&AccountSummary> {
        self.index
            .get(account_id)
            .and_then(|&position| self.accounts.get(position))
    }

    pub fn contains(&self, account_id: &str) -> bool {
        self.index.contains_key(account_id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccountSummary> {
        self.accounts.iter()
    }

    /// Account ids in display order.
    pub fn ids(&self) -> impl Iterator<Item = &AccountId> {
        self.accounts.iter().map(|account| &account.account_id)
    }

    /// Every tag used by at least one account.
    pub fn tags(&self) -> BTreeSet<&str> {
        self.accounts
            .iter()
            .flat_map(|account| account.tags.iter().map(String::as_str))
            .collect()
    }

    /// Accounts picked explicitly or through one of the selected tags.
    ///
    /// Each account appears once, in display order. Ids that are not in the
    /// list are ignored.
    pub fn select(&self, selection: &Selection) -> Vec<&AccountSummary> {
        self.accounts
            .iter()
            .filter(|account| selection.matches(account))
            .collect()
    }

    /// Like [`Self::select`], as a list of its own.
    pub fn subset(&self, selection: &Selection) -> AccountList {
        Self::from_sorted(self.select(selection).into_iter().cloned().collect())
    }

    pub fn into_vec(self) -> Vec<AccountSummary> {
        self.accounts
    }
}

impl<'a> IntoIterator for &'a AccountList {
    type Item = &'a AccountSummary;
    type IntoIter = std::slice::Iter<'a, AccountSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.accounts.iter()
    }
}

impl Serialize for AccountList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.accounts.len()))?;
        for account in &self.accounts {
            map.serialize_entry(&account.account_id, account)?;
        }
        map.end()
    }
}
