//! Persistence layer for the delivery state.
//!
//! This module provides abstractions for state persistence via the
//! repository pattern, allowing different storage backends to be swapped
//! easily.
//!
//! # Architecture
//!
//! The persistence layer is layered:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Application Layer (REST API, CLI, tests)               │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (crate::services) - Business Logic       │
//! │  - Status/attempt updates threaded through buildings     │
//! │  - Checksum-based change detection                       │
//! │  - Dashboard/route composition                           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  StateStore Trait (repository/) - Abstract Interface    │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┴──────────────┐
//!     │   JSON file store            │   In-memory store
//!     │   (production document)      │   (tests, development)
//!     └──────────────────────────────┘
//! ```
//!
//! # Versioned envelope
//!
//! The persisted document is `{ version, buildings[] }`. Version 1 (boolean
//! `delivered` flags) is migrated on read and written back immediately;
//! anything unreadable degrades to the seeded default state instead of
//! failing the caller.

// Feature flag guard: at least one backend must be compiled in.
#[cfg(not(any(feature = "file-store", feature = "local-store")))]
compile_error!("Enable at least one store backend feature.");

pub mod checksum;
pub mod factory;
pub mod migration;
pub mod models;
pub mod repositories;
pub mod repository;
pub mod seed;
pub mod store_config;

pub use checksum::{calculate_checksum, state_checksum};
pub use factory::{StoreBuilder, StoreFactory, StoreType, DEFAULT_STATE_PATH};
pub use migration::{decode_state, migrate_v1_to_v2, Decoded};
pub use models::{ApartmentV1, BuildingV1, PersistedState, StateV1, CURRENT_VERSION};
pub use seed::seed_state;
pub use store_config::StoreConfig;

// Store trait and implementations
#[cfg(feature = "file-store")]
pub use repositories::JsonFileStore;
#[cfg(feature = "local-store")]
pub use repositories::MemoryStore;
pub use repository::{ErrorContext, StateStore, StoreError, StoreResult};
