//! Read-only view over a foreign profile document.
//!
//! The game service owns this schema and changes it between versions, and
//! private accounts come back with most attributes stripped. Nothing here
//! requires a field to exist: every accessor returns `None` or zero.

use serde_json::Value;
use thiserror::Error;

/// Attribute and item names used by the game service.
pub mod keys {
    pub const PROFILE_CHANGES: &str = "profileChanges";
    pub const PROFILE: &str = "profile";
    pub const STATS: &str = "stats";
    pub const ATTRIBUTES: &str = "attributes";
    pub const ITEMS: &str = "items";
    pub const TEMPLATE_ID: &str = "templateId";
    pub const QUANTITY: &str = "quantity";

    pub const LEVEL: &str = "level";
    pub const REWARDS_CLAIMED_POST_MAX_LEVEL: &str = "rewards_claimed_post_max_level";
    pub const COLLECTION_BOOK: &str = "collection_book";
    pub const MAX_BOOK_XP_LEVEL_ACHIEVED: &str = "maxBookXpLevelAchieved";
    pub const DAILY_REWARDS: &str = "daily_rewards";
    pub const TOTAL_DAYS_LOGGED_IN: &str = "totalDaysLoggedIn";

    pub const PERSONAL_XP_BOOST: &str = "ConsumableAccountItem:smallxpboost";
    pub const TEAMMATE_XP_BOOST: &str = "ConsumableAccountItem:smallxpboost_gift";
}

/// Raw text that is not JSON at all.
#[derive(Debug, Error)]
#[error("profile document is not valid JSON")]
pub struct MalformedDocument(#[from] serde_json::Error);

/// Parse raw text into a loosely typed document.
pub fn parse_document(raw: &str) -> Result<Value, MalformedDocument> {
    Ok(serde_json::from_str(raw)?)
}

/// Walk nested objects by key.
pub fn value_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(value, |current, key| current.get(*key))
}

/// Coerce a JSON value into a non-negative count.
///
/// Integers pass through (saturating at `u32::MAX`), finite positive floats
/// are truncated, and anything else counts as zero.
pub fn as_count(value: Option<&Value>) -> u32 {
    let Some(Value::Number(number)) = value else {
        return 0;
    };

    if let Some(unsigned) = number.as_u64() {
        return u32::try_from(unsigned).unwrap_or(u32::MAX);
    }

    match number.as_f64() {
        Some(float) if float.is_finite() && float > 0.0 => float as u32,
        _ => 0,
    }
}

/// The profile object inside whatever envelope the fetch returned.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProfileView<'a> {
    profile: Option<&'a Value>,
}

impl<'a> ProfileView<'a> {
    /// Accepts the full query response (`{ "profileChanges": [...] }`), the
    /// `profileChanges` array, a single change (`{ "profile": {...} }`), or a
    /// bare profile. Anything else gives an empty view.
    pub fn new(document: Option<&'a Value>) -> Self {
        Self {
            profile: document.and_then(resolve_profile),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.profile.is_none()
    }

    /// `stats.attributes`, if present.
    pub fn attributes(&self) -> Option<&'a Value> {
        self.profile
            .and_then(|profile| value_at(profile, &[keys::STATS, keys::ATTRIBUTES]))
            .filter(|attributes| attributes.is_object())
    }

    /// Count stored at `path` under the attributes.
    pub fn attribute_count(&self, path: &[&str]) -> u32 {
        as_count(self.attributes().and_then(|attributes| value_at(attributes, path)))
    }

    /// Every item object in the profile inventory.
    pub fn items(self) -> impl Iterator<Item = &'a Value> {
        self.profile
            .and_then(|profile| profile.get(keys::ITEMS))
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|items| items.values())
            .filter(|item| item.is_object())
    }

    /// Summed quantity of items with the given template id (case-insensitive).
    pub fn item_quantity(&self, template_id: &str) -> u32 {
        self.items()
            .filter(|item| {
                item.get(keys::TEMPLATE_ID)
                    .and_then(Value::as_str)
                    .is_some_and(|id| id.eq_ignore_ascii_case(template_id))
            })
            .map(|item| as_count(item.get(keys::QUANTITY)))
            .fold(0u32, u32::saturating_add)
    }
}

fn resolve_profile(document: &Value) -> Option<&Value> {
    match document {
        Value::Array(changes) => changes
            .iter()
            .find_map(|change| {
                change
                    .get(keys::PROFILE)
                    .filter(|profile| profile.is_object())
            }),
        Value::Object(map) => {
            if let Some(changes) = map.get(keys::PROFILE_CHANGES) {
                return resolve_profile(changes);
            }
            match map.get(keys::PROFILE) {
                Some(profile) => profile.is_object().then_some(profile),
                None => Some(document),
            }
        }
        _ => None,
    }
}
