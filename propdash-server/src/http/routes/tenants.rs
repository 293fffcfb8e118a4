//! Tenant endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use super::CreatedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{NewTenant, TenantWithProperty};

/// Create tenant request
#[derive(Debug, Deserialize)]
pub struct CreateTenantRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub property_id: Option<i64>,
}

/// GET /api/tenants
async fn list_tenants(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TenantWithProperty>>, ApiError> {
    Ok(Json(state.db.tenants().list().await?))
}

/// POST /api/tenants
async fn create_tenant(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateTenantRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let tenant = NewTenant::new(
        &req.first_name,
        &req.last_name,
        &req.email,
        req.phone.as_deref(),
        req.property_id,
    )?;
    let id = state.db.tenants().create(&tenant).await?;

    tracing::info!(id, property_id = ?tenant.property_id, "tenant created");
    Ok(Json(CreatedResponse { id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/tenants", get(list_tenants).post(create_tenant))
}
