//! Payment entity and the payment-with-parties projection

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{calendar_date, money, reference_id, ValidationError};

/// Status assigned to newly recorded payments
pub const PAYMENT_PAID: &str = "Paid";

/// One rent payment attributed to a lease
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub lease_id: i64,
    pub amount: f64,
    pub payment_date: String,
    pub status: String,
}

/// Payment joined through lease to tenant names and property name (INNER JOIN)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct PaymentWithParties {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub payment: Payment,
    pub first_name: String,
    pub last_name: String,
    pub property_name: String,
}

/// Validated input for recording a payment
#[derive(Debug, Clone, PartialEq)]
pub struct NewPayment {
    pub lease_id: i64,
    pub amount: f64,
    pub payment_date: String,
}

impl NewPayment {
    pub fn new(lease_id: i64, amount: f64, payment_date: &str) -> Result<Self, ValidationError> {
        let (_, payment_date) = calendar_date("payment_date", payment_date)?;
        Ok(Self {
            lease_id: reference_id("lease_id", lease_id)?,
            amount: money("amount", amount)?,
            payment_date,
        })
    }
}
