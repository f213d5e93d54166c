//! Replace an account's tags.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;

use super::Registry;

/// Replace the tags of an account
#[derive(Parser)]
pub struct Tag {
    /// Account id to tag
    #[arg(value_name = "ACCOUNT_ID")]
    account_id: String,

    /// New tags; none clears all tags
    #[arg(value_name = "TAG")]
    tags: Vec<String>,
}

impl Tag {
    pub async fn execute(self, registry: &Registry) -> Result<()> {
        let summary = registry
            .set_tags(&self.account_id, self.tags)
            .await
            .with_context(|| format!("Failed to tag account {}", self.account_id))?;

        let tags: Vec<&str> = summary.tags.iter().map(String::as_str).collect();
        println!(
            "{} {} [{}]",
            style("Tagged").bold().green(),
            summary.display_name,
            tags.join(", ")
        );

        Ok(())
    }
}
