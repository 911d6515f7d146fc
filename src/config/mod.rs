//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::store::AlarmStore;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
    /// Alarm store settings
    pub store: StoreConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,
}

/// Alarm store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Backing JSON file for alarm definitions
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(AlarmStore::DEFAULT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.general.verbose);
        assert_eq!(config.store.path, PathBuf::from("alarms.json"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: Config = toml::from_str("[general]\nverbose = true\n").unwrap();
        assert!(config.general.verbose);
        assert_eq!(config.store.path, PathBuf::from("alarms.json"));
    }

    #[test]
    fn test_store_path_from_toml() {
        let config: Config = toml::from_str("[store]\npath = \"/var/lib/alarms.json\"\n").unwrap();
        assert_eq!(config.store.path, PathBuf::from("/var/lib/alarms.json"));
    }
}
