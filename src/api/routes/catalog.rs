//! Catalog Routes
//!
//! - GET /api/v1/catalog - Every content table
//! - GET /api/v1/catalog/:view - Tables rendered by one view

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::error::ApiResult;
use crate::api::state::AppState;
use crate::content::{Catalog, ViewContent};
use crate::navigation::View;

/// GET /api/v1/catalog
pub async fn full_catalog(State(state): State<Arc<AppState>>) -> Json<Catalog> {
    Json(state.catalog)
}

/// GET /api/v1/catalog/:view
pub async fn view_catalog(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<ViewContent>> {
    let view: View = name.parse()?;

    tracing::debug!(%view, "serving view catalog");
    Ok(Json(state.catalog.view(view)))
}
