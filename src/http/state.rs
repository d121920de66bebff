//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::ClimateRepository;
use crate::services::QueryEngine;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Query engine over the injected repository
    pub engine: QueryEngine,
}

impl AppState {
    /// Create application state over the given repository.
    pub fn new(repository: Arc<dyn ClimateRepository>) -> Self {
        Self {
            engine: QueryEngine::new(repository),
        }
    }
}
