//! Property entity and its validated insert model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{money, required_text, ValidationError};

const MAX_NAME_LEN: usize = 200;
const MAX_ADDRESS_LEN: usize = 500;
const MAX_TYPE_LEN: usize = 200;

/// Occupancy status of a property
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Occupied,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rentable unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Property {
    pub id: i64,
    pub name: String,
    pub address: String,
    /// Free-text category (apartment, house, ...)
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub rent_amount: f64,
    pub status: PropertyStatus,
}

/// Validated input for inserting a property
#[derive(Debug, Clone, PartialEq)]
pub struct NewProperty {
    pub name: String,
    pub address: String,
    pub kind: String,
    pub rent_amount: f64,
    pub status: PropertyStatus,
}

impl NewProperty {
    /// Validate raw fields. Status starts as `Available`.
    pub fn new(
        name: &str,
        address: &str,
        kind: &str,
        rent_amount: f64,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            name: required_text("name", name, MAX_NAME_LEN)?,
            address: required_text("address", address, MAX_ADDRESS_LEN)?,
            kind: required_text("type", kind, MAX_TYPE_LEN)?,
            rent_amount: money("rent_amount", rent_amount)?,
            status: PropertyStatus::Available,
        })
    }

    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = status;
        self
    }
}
