//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::Config;
use crate::store::DocumentStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// immutable startup configuration and the document store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: DocumentStore,
}

impl AppState {
    /// Create a new application state. The store is built from the
    /// configuration's storage selection.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let store = DocumentStore::from_config(&config.storage);
        Self {
            inner: Arc::new(AppStateInner { config, store }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the document store.
    #[must_use]
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }
}
