//! `GET /health` liveness check for the dashboard backend
//!
//! Answers without touching the property store so the dashboard can tell
//! "backend down" apart from "database error".

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Liveness reply with the running build version
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}
