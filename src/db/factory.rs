//! Store factory for dependency injection.
//!
//! Creates and configures store instances based on runtime configuration.

use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "file-store")]
use super::repositories::JsonFileStore;
#[cfg(feature = "local-store")]
use super::repositories::MemoryStore;
use super::repository::{StateStore, StoreError, StoreResult};
use super::store_config::StoreConfig;

/// Default document path when nothing is configured.
pub const DEFAULT_STATE_PATH: &str = "data/rounds-state.json";

/// Store backend configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreType {
    /// JSON document file on local disk
    File,
    /// In-memory store
    Local,
}

impl FromStr for StoreType {
    type Err = String;

    /// Parse store type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("file", "local")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "file" | "json" => Ok(Self::File),
            "local" | "memory" => Ok(Self::Local),
            _ => Err(format!("Unknown store type: {}", s)),
        }
    }
}

impl StoreType {
    /// Get store type from environment.
    ///
    /// Reads `STORE_TYPE`. Defaults to File when `STATE_PATH` is present,
    /// otherwise Local.
    pub fn from_env() -> Self {
        if let Ok(val) = std::env::var("STORE_TYPE") {
            return val.parse().unwrap_or(Self::Local);
        }

        if std::env::var("STATE_PATH").is_ok() {
            Self::File
        } else {
            Self::Local
        }
    }
}

/// Factory for creating store instances.
pub struct StoreFactory;

impl StoreFactory {
    /// Create a store instance based on type.
    ///
    /// # Arguments
    /// * `store_type` - Type of store to create
    /// * `path` - Document path (required for the file backend)
    pub fn create(
        store_type: StoreType,
        path: Option<&Path>,
    ) -> StoreResult<Arc<dyn StateStore>> {
        match store_type {
            StoreType::File => {
                #[cfg(feature = "file-store")]
                {
                    let path = path
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_PATH));
                    Ok(Self::create_file(path))
                }
                #[cfg(not(feature = "file-store"))]
                {
                    let _ = path;
                    Err(StoreError::configuration(
                        "File store feature not enabled",
                    ))
                }
            }
            StoreType::Local => {
                #[cfg(feature = "local-store")]
                {
                    Ok(Self::create_local())
                }
                #[cfg(not(feature = "local-store"))]
                {
                    Err(StoreError::configuration(
                        "Local store feature not enabled",
                    ))
                }
            }
        }
    }

    /// Create a JSON file store over `path`.
    #[cfg(feature = "file-store")]
    pub fn create_file(path: impl Into<PathBuf>) -> Arc<dyn StateStore> {
        Arc::new(JsonFileStore::new(path))
    }

    /// Create an in-memory store.
    #[cfg(feature = "local-store")]
    pub fn create_local() -> Arc<dyn StateStore> {
        Arc::new(MemoryStore::new())
    }

    /// Create a store from environment configuration.
    ///
    /// Reads `STORE_TYPE` and `STATE_PATH`.
    pub fn from_env() -> StoreResult<Arc<dyn StateStore>> {
        let store_type = StoreType::from_env();
        let path = std::env::var("STATE_PATH").ok().map(PathBuf::from);
        Self::create(store_type, path.as_deref())
    }

    /// Create a store from a TOML configuration file.
    pub fn from_config_file<P: AsRef<Path>>(config_path: P) -> StoreResult<Arc<dyn StateStore>> {
        let config = StoreConfig::from_file(config_path)?;
        Self::from_store_config(&config)
    }

    /// Create a store from the default configuration file location,
    /// falling back to environment configuration when no file is found.
    pub fn from_default_config() -> StoreResult<Arc<dyn StateStore>> {
        match StoreConfig::from_default_location() {
            Ok(config) => Self::from_store_config(&config),
            Err(_) => Self::from_env(),
        }
    }

    fn from_store_config(config: &StoreConfig) -> StoreResult<Arc<dyn StateStore>> {
        let store_type = config
            .store_type()
            .map_err(|e| StoreError::configuration(format!("Invalid store type: {}", e)))?;
        let path = config.file_path();
        Self::create(store_type, Some(path.as_ref()))
    }
}

/// Builder for configuring store creation.
///
/// # Example
/// ```ignore
/// use rounds_rust::db::{StoreBuilder, StoreType};
///
/// let store = StoreBuilder::new()
///     .store_type(StoreType::File)
///     .path("data/rounds-state.json")
///     .build()?;
/// ```
pub struct StoreBuilder {
    store_type: StoreType,
    path: Option<PathBuf>,
}

impl StoreBuilder {
    /// Create a new builder defaulting to the environment configuration.
    pub fn new() -> Self {
        Self {
            store_type: StoreType::from_env(),
            path: std::env::var("STATE_PATH").ok().map(PathBuf::from),
        }
    }

    /// Set the store type.
    pub fn store_type(mut self, store_type: StoreType) -> Self {
        self.store_type = store_type;
        self
    }

    /// Set the document path for the file backend.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Build the store instance.
    pub fn build(self) -> StoreResult<Arc<dyn StateStore>> {
        StoreFactory::create(self.store_type, self.path.as_deref())
    }
}

impl Default for StoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
