//! API handlers for the scripts REST API.

pub mod scripts;
pub mod system;

use std::sync::Arc;

use crate::config::ApiConfig;
use crate::db::Database;
use crate::script::{DefaultScriptService, ScriptService};

pub use scripts::*;
pub use system::*;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Store handle. Each request acquires its own session from it.
    pub db: Database,
    /// Script operations.
    pub scripts: Arc<dyn ScriptService>,
    /// Upper bound applied to the list `limit` parameter.
    pub max_page_size: i64,
}

impl AppState {
    /// Create state backed by [`DefaultScriptService`].
    pub fn new(db: Database) -> Self {
        Self {
            db,
            scripts: Arc::new(DefaultScriptService),
            max_page_size: ApiConfig::default().max_page_size,
        }
    }

    /// Replace the script service.
    pub fn with_service(mut self, service: Arc<dyn ScriptService>) -> Self {
        self.scripts = service;
        self
    }

    /// Set the maximum page size.
    pub fn with_max_page_size(mut self, max_page_size: i64) -> Self {
        self.max_page_size = max_page_size;
        self
    }
}
