//! Payment endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Deserialize;

use super::CreatedResponse;
use crate::http::error::ApiError;
use crate::http::extractors::ValidJson;
use crate::http::server::AppState;
use crate::models::{NewPayment, PaymentWithParties};

/// Record payment request
#[derive(Debug, Deserialize)]
pub struct CreatePaymentRequest {
    pub lease_id: i64,
    pub amount: f64,
    pub payment_date: String,
}

/// GET /api/payments - newest payment first
async fn list_payments(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<PaymentWithParties>>, ApiError> {
    Ok(Json(state.db.payments().list().await?))
}

/// POST /api/payments
async fn create_payment(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreatePaymentRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let payment = NewPayment::new(req.lease_id, req.amount, &req.payment_date)?;
    let id = state.db.payments().create(&payment).await?;

    tracing::info!(id, lease_id = payment.lease_id, amount = payment.amount, "payment recorded");
    Ok(Json(CreatedResponse { id }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/payments", get(list_payments).post(create_payment))
}
