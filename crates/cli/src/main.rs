//! Roster command-line client.
//!
//! Composition root for the account registry and the profile extractor:
//! loads configuration, sets up logging, opens the account file and runs
//! one subcommand against it.
//!
//! ```bash
//! roster list --tag farm
//! roster add --id 1a2b --display-name Player2 --token "$TOKEN"
//! roster stats profile.json
//! ```

mod commands;
mod config;
mod dirs;
mod logging;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{Add, List, Registry, Remove, Rename, Stats, Tag, Tags};
use config::RosterConfig;
use roster_accounts::{AccountEvent, AccountRegistry, FileAccountStore};

/// Manage linked game accounts and inspect profile stats
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Manage linked game accounts", long_about = None)]
#[command(version)]
struct Cli {
    /// Account file (overrides ROSTER_ACCOUNTS_FILE)
    #[arg(long, global = true, value_name = "PATH")]
    accounts_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List linked accounts
    List(List),

    /// Link a new account
    Add(Add),

    /// Remove a linked account
    Remove(Remove),

    /// Set or clear a custom display name
    Rename(Rename),

    /// Replace the tags of an account
    Tag(Tag),

    /// List tags in use
    Tags(Tags),

    /// Extract metrics from a profile document
    Stats(Stats),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = RosterConfig::from_env();
    if let Some(path) = cli.accounts_file {
        config.accounts_file = path;
    }

    let _log_guard = logging::setup_logging(&config)?;

    tracing::info!("Account file: {}", config.accounts_file.display());

    match cli.command {
        Command::Stats(cmd) => cmd.execute().await,
        Command::List(cmd) => cmd.execute(&open_registry(&config)?).await,
        Command::Add(cmd) => cmd.execute(&open_registry(&config)?).await,
        Command::Remove(cmd) => cmd.execute(&open_registry(&config)?).await,
        Command::Rename(cmd) => cmd.execute(&open_registry(&config)?).await,
        Command::Tag(cmd) => cmd.execute(&open_registry(&config)?).await,
        Command::Tags(cmd) => cmd.execute(&open_registry(&config)?).await,
    }
}

fn open_registry(config: &RosterConfig) -> Result<Registry> {
    let store = FileAccountStore::new(&config.accounts_file).with_context(|| {
        format!(
            "Failed to prepare account directory for {}",
            config.accounts_file.display()
        )
    })?;
    let registry = AccountRegistry::with_event_capacity(store, config.event_buffer);

    let mut events = registry.subscribe();
    tokio::spawn(async move {
        while let Ok(AccountEvent::Loaded(list)) = events.recv().await {
            tracing::debug!("Accounts loaded: {} entries", list.len());
        }
    });

    Ok(registry)
}
