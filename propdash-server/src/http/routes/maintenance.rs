//! Maintenance request endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use super::CreatedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{MaintenanceWithProperty, NewMaintenance};

/// File maintenance request
#[derive(Debug, Deserialize)]
pub struct CreateMaintenanceRequest {
    pub property_id: i64,
    pub description: String,
    /// Low, Medium or High (any case)
    pub priority: String,
}

/// GET /api/maintenance - newest request first
async fn list_maintenance(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<MaintenanceWithProperty>>, ApiError> {
    Ok(Json(state.db.maintenance().list().await?))
}

/// POST /api/maintenance - files the request as Open
async fn create_maintenance(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateMaintenanceRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let request = NewMaintenance::new(req.property_id, &req.description, &req.priority)?;
    let id = state.db.maintenance().create(&request).await?;

    tracing::info!(id, property_id = request.property_id, priority = %request.priority, "maintenance request filed");
    Ok(Json(CreatedResponse { id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/maintenance", get(list_maintenance).post(create_maintenance))
}
