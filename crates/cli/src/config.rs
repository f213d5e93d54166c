//! Runtime configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use roster_accounts::DEFAULT_EVENT_CAPACITY;

use crate::dirs;

const ACCOUNTS_FILE_NAME: &str = "accounts.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RosterConfig {
    pub data_dir: PathBuf,
    pub accounts_file: PathBuf,
    pub log_dir: PathBuf,
    pub event_buffer: usize,
    pub log_to_stderr: bool,
}

impl Default for RosterConfig {
    fn default() -> Self {
        let data_dir = dirs::data_dir();
        Self {
            accounts_file: data_dir.join(ACCOUNTS_FILE_NAME),
            data_dir,
            log_dir: dirs::log_dir(),
            event_buffer: DEFAULT_EVENT_CAPACITY,
            log_to_stderr: false,
        }
    }
}

impl RosterConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `ROSTER_DATA_DIR` - Directory for account data (default: platform-specific)
    /// - `ROSTER_ACCOUNTS_FILE` - Account file (default: `<data dir>/accounts.json`)
    /// - `ROSTER_LOG_DIR` - Log directory (default: platform-specific)
    /// - `ROSTER_EVENT_BUFFER` - Account event queue size (default: 16)
    /// - `ROSTER_LOG_STDERR` - Also log to stderr (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup("ROSTER_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
            config.accounts_file = config.data_dir.join(ACCOUNTS_FILE_NAME);
        }

        if let Some(file) = lookup("ROSTER_ACCOUNTS_FILE") {
            config.accounts_file = PathBuf::from(file);
        }

        if let Some(dir) = lookup("ROSTER_LOG_DIR") {
            config.log_dir = PathBuf::from(dir);
        }

        if let Some(capacity) = lookup("ROSTER_EVENT_BUFFER").and_then(|v| v.parse::<usize>().ok())
        {
            config.event_buffer = capacity.max(1);
        }

        if let Some(enable) = lookup("ROSTER_LOG_STDERR").and_then(|v| parse_bool(&v)) {
            config.log_to_stderr = enable;
        }

        config
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
