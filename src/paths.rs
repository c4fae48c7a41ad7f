//! Centralized path definitions for licmatch
//!
//! ## Storage Layout
//!
//! ```text
//! <config_dir>/licmatch/
//! └── config.toml               # Matcher policies and harvest settings
//! ```
//!
//! `<config_dir>` is the platform config directory (`~/.config` on Linux).

use std::path::PathBuf;

/// Global config directory name
const GLOBAL_DIR: &str = "licmatch";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global licmatch directory.
///
/// Returns `<config_dir>/licmatch/`, or `./.licmatch/` when the platform has
/// no config directory.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().map_or_else(|| PathBuf::from(".licmatch"), |dir| dir.join(GLOBAL_DIR))
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
