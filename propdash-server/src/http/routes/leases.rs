//! Lease endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use super::CreatedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{LeaseWithParties, NewLease};

/// Create lease request
#[derive(Debug, Deserialize)]
pub struct CreateLeaseRequest {
    pub property_id: i64,
    pub tenant_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub monthly_rent: f64,
}

/// GET /api/leases
async fn list_leases(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LeaseWithParties>>, ApiError> {
    Ok(Json(state.db.leases().list().await?))
}

/// POST /api/leases
async fn create_lease(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateLeaseRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let lease = NewLease::new(
        req.property_id,
        req.tenant_id,
        &req.start_date,
        &req.end_date,
        req.monthly_rent,
    )?;
    let id = state.db.leases().create(&lease).await?;

    tracing::info!(id, property_id = lease.property_id, tenant_id = lease.tenant_id, "lease created");
    Ok(Json(CreatedResponse { id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/leases", get(list_leases).post(create_lease))
}
