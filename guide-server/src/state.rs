//! Shared application state for the API server.

use std::sync::Arc;

use guide::GuideStore;
use tokio::sync::RwLock;

/// Shared state accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The single guide store. Reads share the lock; toggles take it exclusively.
    pub store: Arc<RwLock<GuideStore>>,
}

impl AppState {
    pub fn new(store: GuideStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
