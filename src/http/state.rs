//! Application state for the HTTP server.

use crate::db::StateStore;
use std::sync::Arc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store instance for persistence operations
    pub store: Arc<dyn StateStore>,
}

impl AppState {
    /// Create a new application state with the given store.
    pub fn new(store: Arc<dyn StateStore>) -> Self {
        Self { store }
    }
}
