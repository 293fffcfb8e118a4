//! Property endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use super::CreatedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{NewProperty, Property};

/// Create property request
#[derive(Debug, Deserialize)]
pub struct CreatePropertyRequest {
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub rent_amount: f64,
}

/// GET /api/properties
async fn list_properties(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Property>>, ApiError> {
    Ok(Json(state.db.properties().list().await?))
}

/// POST /api/properties - new properties start out Available
async fn create_property(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreatePropertyRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let property = NewProperty::new(&req.name, &req.address, &req.kind, req.rent_amount)?;
    let id = state.db.properties().create(&property).await?;

    tracing::info!(id, name = %property.name, "property created");
    Ok(Json(CreatedResponse { id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/properties", get(list_properties).post(create_property))
}
