//! Path resolution for taskboard data files.
//!
//! Follows the XDG base directory layout.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "taskboard";

/// Get XDG-compliant data directory for taskboard.
///
/// `$XDG_DATA_HOME/taskboard`, falling back to `~/.local/share/taskboard`,
/// and to a relative `taskboard` directory when neither variable is set.
pub fn get_data_dir() -> PathBuf {
    let data_home = env::var("XDG_DATA_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| {
            env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".local/share"))
        })
        .unwrap_or_default();

    data_home.join(APP_DIR)
}

/// Get database file path (data_dir/taskboard.db).
pub fn get_db_path() -> PathBuf {
    get_data_dir().join("taskboard.db")
}
