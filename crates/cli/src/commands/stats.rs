//! Derive gameplay metrics from a saved profile response.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use roster_profile::{ProfileMetrics, extract_commander_level, parse_document};
use tokio::io::AsyncReadExt;

/// Show metrics extracted from a profile document
#[derive(Parser)]
pub struct Stats {
    /// Profile JSON file, or `-` for stdin
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Print metrics as JSON
    #[arg(long)]
    json: bool,
}

impl Stats {
    pub async fn execute(self) -> Result<()> {
        let raw = self.read_input().await?;

        let document = match parse_document(&raw) {
            Ok(document) => Some(document),
            Err(e) => {
                tracing::warn!("{}: {}", self.input.display(), e);
                eprintln!(
                    "{} {} is not JSON, reporting empty metrics",
                    style("Warning:").bold().yellow(),
                    self.input.display()
                );
                None
            }
        };

        let metrics = ProfileMetrics::extract(document.as_ref());

        if self.json {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
            return Ok(());
        }

        let level = extract_commander_level(document.as_ref());
        println!("{}", style("=== Profile Metrics ===").bold().green());
        println!(
            "  Commander level:      {} ({} + {} past max)",
            metrics.commander_level_total, level.current, level.past_maximum
        );
        println!("  Personal XP boosts:   {}", metrics.personal_xp_boosts);
        println!("  Teammate XP boosts:   {}", metrics.teammate_xp_boosts);
        println!("  Days logged in:       {}", metrics.total_days_logged_in);
        println!("  Collection book:      {}", metrics.collection_book_level);

        Ok(())
    }

    async fn read_input(&self) -> Result<String> {
        if self.input.as_os_str() == "-" {
            let mut raw = String::new();
            tokio::io::stdin()
                .read_to_string(&mut raw)
                .await
                .context("Failed to read profile from stdin")?;
            return Ok(raw);
        }

        tokio::fs::read_to_string(&self.input)
            .await
            .with_context(|| format!("Failed to read profile file: {}", self.input.display()))
    }
}
