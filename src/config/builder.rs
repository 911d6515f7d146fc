//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicitly named file must load; without one the default
    /// locations are searched and a miss keeps the defaults.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI verbose flag
    pub fn with_verbose(mut self, verbose: Option<bool>) -> Self {
        if let Some(v) = verbose {
            self.config.general.verbose = v;
        }
        self
    }

    /// Override with CLI store file path
    pub fn with_store_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(p) = path {
            self.config.store.path = p;
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert!(!config.general.verbose);
        assert_eq!(config.store.path, PathBuf::from("alarms.json"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_verbose(Some(true))
            .with_store_path(Some(PathBuf::from("/tmp/other.json")))
            .build();

        assert!(config.general.verbose);
        assert_eq!(config.store.path, PathBuf::from("/tmp/other.json"));
    }

    #[test]
    fn test_cli_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[store]\npath = \"from-file.json\"\n").unwrap();

        let config = ConfigBuilder::new()
            .with_file(path.to_str())
            .unwrap()
            .with_store_path(Some(PathBuf::from("from-cli.json")))
            .build();

        assert_eq!(config.store.path, PathBuf::from("from-cli.json"));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/alarmctl.toml"));
        assert!(result.is_err());
    }
}
