//! Demo configuration
//!
//! The demo reads its search bar config from the file named by
//! `SEARCHBAR_CONFIG`, or from `searchbar/config.toml` in the user config
//! directory. A missing file means defaults.

use std::path::PathBuf;

use crate::shared::config::{ConfigError, SearchBarConfig};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "SEARCHBAR_CONFIG";

/// Demo application configuration wrapper.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    search_bar: SearchBarConfig,
    source: Option<PathBuf>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            search_bar: SearchBarConfig::default(),
            source: None,
        }
    }
}

impl DemoConfig {
    /// Load from the discovered path, or defaults when there is no file
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::from_path(path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let search_bar = SearchBarConfig::load(&path)?;
        Ok(Self {
            search_bar,
            source: Some(path),
        })
    }

    /// `SEARCHBAR_CONFIG` if set, else the per-user config file
    pub fn config_path() -> Option<PathBuf> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => dirs::config_dir().map(|dir| dir.join("searchbar").join("config.toml")),
        }
    }

    pub fn search_bar(&self) -> &SearchBarConfig {
        &self.search_bar
    }

    /// File the config came from, if any
    pub fn source(&self) -> Option<&PathBuf> {
        self.source.as_ref()
    }
}
