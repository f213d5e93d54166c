//! Register an account produced by an external linking flow.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster_accounts::{AccountRecord, Provider, Token};

use super::Registry;

/// Link a new account
#[derive(Parser)]
pub struct Add {
    /// Account id reported by the game service
    #[arg(long, value_name = "ACCOUNT_ID")]
    id: String,

    /// Display name reported by the game service
    #[arg(long, value_name = "NAME")]
    display_name: String,

    /// Identity provider (epic, xbl, psn)
    #[arg(long, default_value = "epic")]
    provider: Provider,

    /// Credential issued by the linking flow
    #[arg(long, value_name = "TOKEN")]
    token: String,

    /// Optional custom display name
    #[arg(long, value_name = "NAME")]
    custom_name: Option<String>,

    /// Tags for group selection (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    tags: Vec<String>,
}

impl Add {
    pub async fn execute(self, registry: &Registry) -> Result<()> {
        let mut record = AccountRecord::new(
            self.id.as_str(),
            self.display_name,
            self.provider,
            Token::new(self.token),
        )
        .with_tags(self.tags);

        if let Some(name) = self.custom_name {
            record = record.with_custom_display_name(name);
        }

        let summary = registry
            .add(record)
            .await
            .with_context(|| format!("Failed to link account {}", self.id))?;

        println!(
            "{} {} ({})",
            style("Linked").bold().green(),
            summary.display_name,
            summary.account_id
        );

        Ok(())
    }
}
