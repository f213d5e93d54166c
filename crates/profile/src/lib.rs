//! Pure extraction of gameplay metrics from game-service profile documents.
//!
//! No I/O happens here. Callers hand over whatever the fetch returned (or
//! nothing) and always get metrics back; absent or malformed data reads as
//! zero.
pub mod document;
pub mod lookup;
pub mod metrics;

pub use document::{MalformedDocument, ProfileView, as_count, parse_document, value_at};
pub use lookup::LookupOutcome;
pub use metrics::{
    CommanderLevel, ProfileMetrics, XpBoosts, extract_collection_book_level,
    extract_commander_level, extract_days_logged_in, extract_xp_boosts,
};
