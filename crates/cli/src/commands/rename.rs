//! Set or clear an account's custom display name.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster_accounts::custom_name_suffix;

use super::Registry;

/// Set or clear the custom display name of an account
#[derive(Parser)]
pub struct Rename {
    /// Account id to rename
    #[arg(value_name = "ACCOUNT_ID")]
    account_id: String,

    /// New custom name; omit to clear it
    #[arg(value_name = "NAME")]
    name: Option<String>,
}

impl Rename {
    pub async fn execute(self, registry: &Registry) -> Result<()> {
        let summary = registry
            .set_custom_display_name(&self.account_id, self.name)
            .await
            .with_context(|| format!("Failed to rename account {}", self.account_id))?;

        println!(
            "{} {}{}",
            style("Updated").bold().green(),
            summary.display_name,
            style(custom_name_suffix(&summary)).dim()
        );

        Ok(())
    }
}
