//! Route handlers organized by resource

pub mod health;
pub mod stats;
pub mod properties;
pub mod tenants;
pub mod leases;
pub mod payments;
pub mod maintenance;

use serde::{Deserialize, Serialize};

/// Body returned by every create endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i64,
}
