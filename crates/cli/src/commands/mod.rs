//! Subcommand implementations.

mod add;
mod list;
mod remove;
mod rename;
mod stats;
mod tag;

pub use add::Add;
pub use list::{List, Tags};
pub use remove::Remove;
pub use rename::Rename;
pub use stats::Stats;
pub use tag::Tag;

use roster_accounts::{AccountRegistry, FileAccountStore};

/// Registry over the configured account file.
pub type Registry = AccountRegistry<FileAccountStore>;
