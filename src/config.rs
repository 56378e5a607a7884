// User configuration for the CLI

use crate::task::{Category, Priority};
use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "tasklist";

/// Optional user configuration.
///
/// Carries the snapshot location and the creation-form defaults applied when
/// `add` is invoked without an explicit priority or category. Every field is
/// optional; an absent config file means all defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    #[serde(default)]
    pub default_priority: Option<Priority>,
    #[serde(default)]
    pub default_category: Option<Category>,
}

impl Config {
    /// Load from the resolved config file location.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file()?)
    }

    /// Load from a specific path. A missing file yields the defaults; a file
    /// that exists but does not parse is an error (the config is
    /// user-authored, unlike the snapshot).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn default_priority(&self) -> Priority {
        self.default_priority.unwrap_or_default()
    }

    pub fn default_category(&self) -> Category {
        self.default_category.unwrap_or_default()
    }

    /// Snapshot location: configured value, else
    /// `<data_dir>/tasklist/tasks.json`.
    pub fn data_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }

        dirs::data_dir()
            .map(|dir| dir.join(APP_NAME).join("tasks.json"))
            .ok_or_else(|| eyre!("Could not determine data directory"))
    }
}

/// Config file location: `TASKLIST_CONFIG` overrides the default
/// `<config_dir>/tasklist/config.yaml`.
pub fn config_file() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("TASKLIST_CONFIG") {
        return Ok(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join(APP_NAME).join("config.yaml"))
        .ok_or_else(|| eyre!("Could not determine config directory"))
}
