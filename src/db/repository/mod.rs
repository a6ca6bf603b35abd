//! Store trait definition.
//!
//! The store is the sole owner of the canonical persisted state; every
//! domain operation loads a snapshot, derives a new value, and writes the
//! whole envelope back.

pub mod error;

pub use error::{ErrorContext, StoreError, StoreResult};

use async_trait::async_trait;

use super::models::PersistedState;

/// Repository trait for the persisted delivery state.
///
/// # Failure semantics
///
/// `load` never propagates malformed content: absent, unparseable or
/// unknown-version data resolves to the seeded default state. Recognized
/// older schemas are migrated and written back before returning. `save`
/// failures are real errors; callers must be able to observe that a write
/// did not take effect.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` to work with async Rust.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the persisted envelope, degrading gracefully to the seed.
    async fn load(&self) -> StoreResult<PersistedState>;

    /// Persist the full envelope. Full-replace write, not a diff.
    async fn save(&self, state: &PersistedState) -> StoreResult<()>;

    /// Cheap probe that the backing storage is reachable.
    async fn health_check(&self) -> StoreResult<bool>;
}
