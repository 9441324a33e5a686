//! # Configuration
//!
//! snipvault reads an optional `config.toml` from the OS config directory
//! (`~/.config/snipvault/config.toml` on Linux, via the `dirs` crate).
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_dir` | `<data dir>/snipvault` | Where the snippet store files live |
//! | `export_file` | `snipvault-snippets.json` | Default name for `snipvault export` |
//!
//! The `SNIPVAULT_DATA_DIR` environment variable overrides `data_dir`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::DEFAULT_EXPORT_FILE;

pub const DATA_DIR_ENV: &str = "SNIPVAULT_DATA_DIR";

fn default_export_file() -> String {
    DEFAULT_EXPORT_FILE.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the store files
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// File written by `export` when no path is given
    #[serde(default = "default_export_file")]
    pub export_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_file: default_export_file(),
        }
    }
}

impl Config {
    /// Location of the user's config file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("snipvault").join("config.toml"))
    }

    /// Loads the user's config, falling back to defaults when the file is
    /// missing or unreadable, then applies the environment override.
    pub fn load() -> Self {
        let mut config = match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path).unwrap_or_else(|e| {
                log::warn!("Ignoring config file: {:#}", e);
                Self::default()
            }),
            _ => Self::default(),
        };

        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        config
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Resolved store directory.
    pub fn data_dir(&self) -> Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(dirs::data_dir()
                .context("Failed to get data directory")?
                .join("snipvault")),
        }
    }
}
