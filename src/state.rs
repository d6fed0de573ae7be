//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the marketplace store, the per-client storage that backs session
//! and locale selection, and the latency profile applied to store calls.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::storage::ClientStorage;
use crate::store::{Latency, Store};

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub storage: ClientStorage,
    pub latency: Latency,
    pub config: AppConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, store: Store) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            storage: ClientStorage::new(),
            latency: Latency::new(config.latency_ms),
            config,
        }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
