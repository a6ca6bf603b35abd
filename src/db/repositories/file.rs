//! JSON document-file store implementation.
//!
//! The production backend: one JSON document on local disk holding the
//! whole envelope. Each call is a single synchronous read or write; the
//! writer lock serializes mutation the same way the in-memory backend
//! does.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::db::migration::{decode_state, Decoded};
use crate::db::models::PersistedState;
use crate::db::repository::{ErrorContext, StateStore, StoreError, StoreResult};
use crate::db::seed::seed_state;

/// Document store persisting the envelope as a JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    // Single-writer discipline across concurrent handlers.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    /// Create a store over the given document path.
    ///
    /// The file does not need to exist yet; the first load seeds it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The document path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_document(&self, state: &PersistedState) -> StoreResult<()> {
        let _guard = self.write_lock.lock();

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    StoreError::io_with_context(
                        e.to_string(),
                        ErrorContext::new("save").with_details(parent.display().to_string()),
                    )
                })?;
            }
        }

        let json = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, json).map_err(|e| {
            StoreError::io_with_context(
                e.to_string(),
                ErrorContext::new("save").with_details(self.path.display().to_string()),
            )
        })
    }
}

#[async_trait]
impl StateStore for JsonFileStore {
    async fn load(&self) -> StoreResult<PersistedState> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // First run: create the document with the seed. The read
                // path stays graceful even when that write fails.
                info!("No state document at {}, seeding", self.path.display());
                let seeded = seed_state(Utc::now());
                if let Err(e) = self.write_document(&seeded) {
                    warn!("Failed to persist seed: {}", e);
                }
                return Ok(seeded);
            }
            Err(e) => {
                // Unreadable storage still degrades to a usable state.
                warn!("Failed to read {}: {}, serving seeded state", self.path.display(), e);
                return Ok(seed_state(Utc::now()));
            }
        };

        match decode_state(&raw) {
            Decoded::Current(state) => Ok(state),
            Decoded::Migrated(state) => {
                // Persist the migrated result before handing it out, so the
                // old schema is read at most once. A failed write-back just
                // means the next load migrates again.
                info!("Migrated state document {} to current schema", self.path.display());
                if let Err(e) = self.write_document(&state) {
                    warn!("Failed to persist migrated state: {}", e);
                }
                Ok(state)
            }
            // Corrupt content is left on disk untouched; the seed is only
            // persisted once a mutation goes through save().
            Decoded::Fallback => Ok(seed_state(Utc::now())),
        }
    }

    async fn save(&self, state: &PersistedState) -> StoreResult<()> {
        self.write_document(state)
    }

    async fn health_check(&self) -> StoreResult<bool> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.exists()),
            _ => Ok(true),
        }
    }
}
