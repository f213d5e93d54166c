//! Account records as persisted, and the redacted view handed to presentation.

use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque identifier of a linked account, unique across the store.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AccountId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// External identity kind an account was linked through.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Provider {
    /// Primary game-service identity
    Epic,
    /// Xbox Live linked identity
    Xbl,
    /// PlayStation Network linked identity
    Psn,
}

/// Credential material for an account.
///
/// `Debug` never prints the secret; the raw value is only reachable through
/// [`Token::expose`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// A persisted linkage between this machine and one external-service identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRecord {
    pub account_id: AccountId,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_display_name: Option<String>,
    pub provider: Provider,
    pub token: Token,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    /// Fields this version does not model; written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AccountRecord {
    pub fn new(
        account_id: impl Into<AccountId>,
        display_name: impl Into<String>,
        provider: Provider,
        token: Token,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            display_name: display_name.into(),
            custom_display_name: None,
            provider,
            token,
            tags: BTreeSet::new(),
            extra: Map::new(),
        }
    }

    /// Sets the name override; a blank name leaves none.
    pub fn with_custom_display_name(mut self, name: impl Into<String>) -> Self {
        self.custom_display_name = normalize_custom_name(Some(name.into()));
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = normalize_tags(tags);
        self
    }

    /// Checks the invariants every stored record must satisfy.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.account_id.as_str().trim().is_empty() {
            return Err("account id must not be empty".to_string());
        }
        if self.display_name.trim().is_empty() {
            return Err(format!(
                "display name of account {} must not be empty",
                self.account_id
            ));
        }
        Ok(())
    }
}

/// Trims a custom name; blank names become `None`.
pub(crate) fn normalize_custom_name(name: Option<String>) -> Option<String> {
    name.map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
}

/// Trims labels and drops blank ones.
pub(crate) fn normalize_tags<I, T>(tags: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    tags.into_iter()
        .map(Into::into)
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Account as seen by presentation collaborators.
///
/// There is no provider or token field here: redaction is a property of the
/// type, so nothing added to [`AccountRecord`] later crosses this boundary
/// unless it is mapped explicitly below.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub account_id: AccountId,
    pub display_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_display_name: Option<String>,
    pub tags: BTreeSet<String>,
}

impl From<&AccountRecord> for AccountSummary {
    fn from(record: &AccountRecord) -> Self {
        Self {
            account_id: record.account_id.clone(),
            display_name: record.display_name.clone(),
            custom_display_name: record.custom_display_name.clone(),
            tags: record.tags.clone(),
        }
    }
}
