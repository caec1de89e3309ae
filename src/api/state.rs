//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ServerConfig;
use crate::content::Catalog;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Host configuration
    pub config: Arc<ServerConfig>,
    /// Content tables compiled into this build
    pub catalog: Catalog,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Catalog::get(),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    pub fn static_dir(&self) -> &Path {
        &self.config.static_dir
    }

    /// Whether the built front-end is present
    pub fn bundle_ready(&self) -> bool {
        self.static_dir().join("index.html").is_file()
    }
}
