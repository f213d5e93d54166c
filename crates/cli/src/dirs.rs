//! Platform-specific directory utilities
//!
//! Follows platform conventions for data and cache directories.

use std::path::PathBuf;

const APP_NAME: &str = "roster";

/// Get the platform-specific data directory
///
/// - macOS: `~/Library/Application Support/roster`
/// - Linux: `~/.local/share/roster` (or `$XDG_DATA_HOME/roster`)
/// - Windows: `%APPDATA%\roster`
/// - Fallback: `./roster_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./roster_data"))
}

/// Get the platform-specific log directory
///
/// - macOS: `~/Library/Caches/roster/logs`
/// - Linux: `~/.cache/roster/logs` (or `$XDG_CACHE_HOME/roster/logs`)
/// - Windows: `%LOCALAPPDATA%\roster\logs`
/// - Fallback: `/tmp/roster/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/roster"));

    base_dir.join("logs")
}
