//! Maintenance requests, their priority, and the request-with-property projection

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{reference_id, required_text, ValidationError};

/// Status of newly filed requests; counted by the dashboard stats
pub const MAINTENANCE_OPEN: &str = "Open";

const MAX_DESCRIPTION_LEN: usize = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(rename_all = "PascalCase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ValidationError::InvalidVariant {
                field: "priority",
                value: s.to_owned(),
            }),
        }
    }
}

/// A tracked issue against a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MaintenanceRequest {
    pub id: i64,
    pub property_id: i64,
    pub description: String,
    pub priority: Priority,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Maintenance request joined with its property name (INNER JOIN)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct MaintenanceWithProperty {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub request: MaintenanceRequest,
    pub property_name: String,
}

/// Validated input for filing a maintenance request
#[derive(Debug, Clone, PartialEq)]
pub struct NewMaintenance {
    pub property_id: i64,
    pub description: String,
    pub priority: Priority,
}

impl NewMaintenance {
    pub fn new(
        property_id: i64,
        description: &str,
        priority: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            property_id: reference_id("property_id", property_id)?,
            description: required_text("description", description, MAX_DESCRIPTION_LEN)?,
            priority: priority.parse()?,
        })
    }
}
