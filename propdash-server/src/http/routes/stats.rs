//! Dashboard stats endpoint

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::DashboardStats;

/// GET /api/stats
async fn get_stats(State(state): State<Arc<AppState>>) -> Result<Json<DashboardStats>, ApiError> {
    let stats = state.db.stats().dashboard().await?;
    Ok(Json(stats))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/stats", get(get_stats))
}
