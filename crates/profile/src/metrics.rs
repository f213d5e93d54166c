//! Gameplay metrics derived from a profile document.
//!
//! Every extractor is total: a missing document, a missing field, or a field
//! of the wrong type contributes zero.

use serde::Serialize;
use serde_json::Value;

use crate::document::{ProfileView, keys, parse_document};

/// Commander level split into its two tracked buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommanderLevel {
    /// Regular level up to the cap
    pub current: u32,
    /// Levels claimed past the cap
    pub past_maximum: u32,
    pub total: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct XpBoosts {
    pub personal: u32,
    pub teammate: u32,
}

/// All metrics for one profile. Derived, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileMetrics {
    pub commander_level_total: u32,
    #[serde(rename = "personalXPBoosts")]
    pub personal_xp_boosts: u32,
    #[serde(rename = "teammateXPBoosts")]
    pub teammate_xp_boosts: u32,
    pub total_days_logged_in: u32,
    pub collection_book_level: u32,
}

impl ProfileMetrics {
    pub fn extract(profile: Option<&Value>) -> Self {
        let boosts = extract_xp_boosts(profile);

        Self {
            commander_level_total: extract_commander_level(profile).total,
            personal_xp_boosts: boosts.personal,
            teammate_xp_boosts: boosts.teammate,
            total_days_logged_in: extract_days_logged_in(profile),
            collection_book_level: extract_collection_book_level(profile),
        }
    }

    /// Extract from raw response text. Text that is not JSON yields zeros.
    pub fn from_json_str(raw: &str) -> Self {
        match parse_document(raw) {
            Ok(document) => Self::extract(Some(&document)),
            Err(e) => {
                tracing::debug!("Ignoring unparseable profile document: {}", e);
                Self::default()
            }
        }
    }
}

pub fn extract_commander_level(profile: Option<&Value>) -> CommanderLevel {
    let view = ProfileView::new(profile);
    let current = view.attribute_count(&[keys::LEVEL]);
    let past_maximum = view.attribute_count(&[keys::REWARDS_CLAIMED_POST_MAX_LEVEL]);

    CommanderLevel {
        current,
        past_maximum,
        total: current.saturating_add(past_maximum),
    }
}

pub fn extract_xp_boosts(profile: Option<&Value>) -> XpBoosts {
    let view = ProfileView::new(profile);

    XpBoosts {
        personal: view.item_quantity(keys::PERSONAL_XP_BOOST),
        teammate: view.item_quantity(keys::TEAMMATE_XP_BOOST),
    }
}

pub fn extract_collection_book_level(profile: Option<&Value>) -> u32 {
    ProfileView::new(profile)
        .attribute_count(&[keys::COLLECTION_BOOK, keys::MAX_BOOK_XP_LEVEL_ACHIEVED])
}

pub fn extract_days_logged_in(profile: Option<&Value>) -> u32 {
    ProfileView::new(profile).attribute_count(&[keys::DAILY_REWARDS, keys::TOTAL_DAYS_LOGGED_IN])
}
