//! File-based persistence of a configuration.
//!
//! No file format is defined yet, so [`MySQLConfig`] always reports
//! [`ConfigError::NotImplemented`].

use std::path::Path;

use crate::config::MySQLConfig;
use crate::error::ConfigError;

/// Load and save a configuration outside of environment variables.
pub trait ConfigPersistence {
    /// Replace the configuration with the contents of `path`.
    fn load(&mut self, path: &Path) -> Result<(), ConfigError>;

    /// Write the configuration to `path`.
    fn save(&self, path: &Path) -> Result<(), ConfigError>;
}

impl ConfigPersistence for MySQLConfig {
    fn load(&mut self, _path: &Path) -> Result<(), ConfigError> {
        Err(ConfigError::NotImplemented)
    }

    fn save(&self, _path: &Path) -> Result<(), ConfigError> {
        Err(ConfigError::NotImplemented)
    }
}
