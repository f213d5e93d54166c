//! Show linked accounts and their tags.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster_accounts::{AccountSummary, Selection, custom_name_suffix};

use super::Registry;

/// List linked accounts in display order
#[derive(Parser)]
pub struct List {
    /// Only accounts carrying this tag (repeatable)
    #[arg(short, long = "tag", value_name = "TAG")]
    tags: Vec<String>,

    /// Only this account (repeatable)
    #[arg(short, long = "id", value_name = "ACCOUNT_ID")]
    ids: Vec<String>,

    /// Print JSON keyed by account id
    #[arg(long)]
    json: bool,
}

impl List {
    pub async fn execute(self, registry: &Registry) -> Result<()> {
        let list = registry.load_or_empty().await;

        let selection = self
            .ids
            .into_iter()
            .fold(Selection::new(), Selection::with_account);
        let selection = self.tags.into_iter().fold(selection, Selection::with_tag);

        let list = if selection.is_empty() {
            list
        } else {
            list.subset(&selection)
        };

        if self.json {
            let json = serde_json::to_string_pretty(&list).context("Failed to serialize accounts")?;
            println!("{}", json);
            return Ok(());
        }

        if list.is_empty() {
            println!("{}", style("No linked accounts").yellow());
            return Ok(());
        }

        for account in &list {
            print_account(account);
        }

        Ok(())
    }
}

fn print_account(account: &AccountSummary) {
    let tags: Vec<&str> = account.tags.iter().map(String::as_str).collect();
    let tags = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.join(", "))
    };

    println!(
        "{}{}  {}{}",
        style(&account.display_name).bold(),
        style(custom_name_suffix(account)).dim(),
        style(&account.account_id).cyan(),
        style(tags).magenta()
    );
}

/// List every tag in use
#[derive(Parser)]
pub struct Tags {}

impl Tags {
    pub async fn execute(self, registry: &Registry) -> Result<()> {
        let list = registry.load_or_empty().await;

        for tag in list.tags() {
            let count = list
                .iter()
                .filter(|account| account.tags.contains(tag))
                .count();
            println!("{}  {}", style(tag).magenta(), style(count).dim());
        }

        Ok(())
    }
}
