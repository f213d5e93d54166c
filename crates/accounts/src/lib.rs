//! Linked game-account registry backed by a single JSON file.
//!
//! Modules are organized by responsibility:
//! - [`repository`] owns durable storage (whole-file read and atomic replace)
//! - [`registry`] builds the deduplicated, sorted, redacted view and performs
//!   serialized mutations
//! - [`ordering`] holds the effective-name rule and numeric-aware comparison
//! - [`list`] and [`selection`] are what presentation collaborators consume
//! - [`events`] carries "accounts loaded" notifications
pub mod error;
pub mod events;
pub mod list;
pub mod ordering;
pub mod registry;
pub mod repository;
pub mod selection;
pub mod types;

pub use error::{RegistryError, Result, StoreError, UnavailableCause};
pub use events::{AccountEvent, AccountEvents, DEFAULT_EVENT_CAPACITY};
pub use list::AccountList;
pub use ordering::{
    DisplayNamed, compare_names, custom_name_suffix, effective_name, sort_by_effective_name,
};
pub use registry::{AccountRegistry, dedup_last_wins};
pub use repository::{AccountStore, FileAccountStore, InMemoryAccountStore};
pub use selection::Selection;
pub use types::{AccountId, AccountRecord, AccountSummary, Provider, Token};
