pub mod config;
pub mod rest;
pub mod store;

use std::sync::Arc;

use config::ServerConfig;
use store::TaskStore;

/// Shared application state passed to every REST handler.
///
/// Constructed once in `main` and injected via axum `State` as
/// `Arc<AppContext>`: single-instance semantics without global mutable
/// state.
pub struct AppContext {
    pub config: Arc<ServerConfig>,
    /// The in-memory task store. All mutations go through its lock.
    pub store: TaskStore,
}

impl AppContext {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            store: TaskStore::new(),
        }
    }
}
