//! Data Transfer Objects
//!
//! Response types for the host endpoints. Catalog tables serialize directly
//! from [`crate::content`].

use serde::Serialize;

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// "healthy" or "degraded"
    pub status: String,
    /// Bundle directory being served
    pub static_dir: String,
    /// Content entries compiled into the build
    pub catalog_entries: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
