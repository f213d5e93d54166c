//! Unlink an account.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use super::Registry;

/// Remove a linked account
#[derive(Parser)]
pub struct Remove {
    /// Account id to remove
    #[arg(value_name = "ACCOUNT_ID")]
    account_id: String,
}

impl Remove {
    pub async fn execute(self, registry: &Registry) -> Result<()> {
        // Only report success once the write has landed
        let removed = registry
            .remove(&self.account_id)
            .await
            .with_context(|| format!("Failed to remove account {}", self.account_id))?;

        if removed {
            println!("{} {}", style("Removed").bold().green(), self.account_id);
        } else {
            println!(
                "{} {} was not linked",
                style("Unchanged:").bold().yellow(),
                self.account_id
            );
        }

        Ok(())
    }
}
