//! Store configuration file support.
//!
//! Reads store configuration from TOML configuration files:
//!
//! ```toml
//! [store]
//! type = "file"
//!
//! [file]
//! path = "data/rounds-state.json"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::factory::{StoreType, DEFAULT_STATE_PATH};
use super::repository::StoreError;

/// Store configuration from file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub store: StoreSettings,
    #[serde(default)]
    pub file: FileSettings,
}

/// Store type settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    #[serde(rename = "type")]
    pub store_type: String,
}

/// File backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_state_path")]
    pub path: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            path: default_state_path(),
        }
    }
}

fn default_state_path() -> String {
    DEFAULT_STATE_PATH.to_string()
}

impl StoreConfig {
    /// Load store configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            StoreError::configuration(format!("Failed to read config file: {}", e))
        })?;

        let config: StoreConfig = toml::from_str(&content).map_err(|e| {
            StoreError::configuration(format!("Failed to parse config file: {}", e))
        })?;

        Ok(config)
    }

    /// Load store configuration from the default location.
    ///
    /// Searches for `store.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, StoreError> {
        let search_paths = vec![
            PathBuf::from("store.toml"),
            PathBuf::from("config/store.toml"),
            PathBuf::from("../store.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(StoreError::configuration(
            "No store.toml found in standard locations",
        ))
    }

    /// Get the store type from configuration.
    pub fn store_type(&self) -> Result<StoreType, String> {
        StoreType::from_str(&self.store.store_type)
    }

    /// Document path for the file backend.
    pub fn file_path(&self) -> PathBuf {
        PathBuf::from(&self.file.path)
    }
}
