//! Global configuration management
//!
//! Selects which match policies run and how the harvest policy reads tool
//! output. Config is stored at `<config_dir>/licmatch/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::services::{CLEARLYDEFINED_TOOL, DEFAULT_MUTABLE_LICENSE_URL_HOSTS};
use crate::error::{Error, Result};
use crate::paths;

/// Global licmatch configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// License matcher settings
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// Which policies the license matcher runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Compare license file hashes and tokens
    #[serde(default = "enabled")]
    pub definition_policy: bool,
    /// Compare ecosystem declared-license fields
    #[serde(default = "enabled")]
    pub harvest_policy: bool,
    /// Harvest policy settings
    #[serde(default)]
    pub harvest: HarvestConfig,
}

const fn enabled() -> bool {
    true
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            definition_policy: true,
            harvest_policy: true,
            harvest: HarvestConfig::default(),
        }
    }
}

/// Harvest policy settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Tool whose latest output holds declared-license data
    #[serde(default = "default_tool")]
    pub tool: String,
    /// Hosts whose license URL matches prove nothing
    #[serde(default = "default_mutable_hosts")]
    pub mutable_license_url_hosts: Vec<String>,
}

fn default_tool() -> String {
    CLEARLYDEFINED_TOOL.to_string()
}

fn default_mutable_hosts() -> Vec<String> {
    DEFAULT_MUTABLE_LICENSE_URL_HOSTS.iter().map(ToString::to_string).collect()
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            tool: default_tool(),
            mutable_license_url_hosts: default_mutable_hosts(),
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or use defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|err| {
            log::warn!("ignoring config: {err}");
            Self::default()
        })
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::io(path, source))?;
        toml::from_str(&content).map_err(|source| Error::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).map_err(|source| Error::io(dir, source))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| Error::io(path, source))
    }
}
