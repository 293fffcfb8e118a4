//! Lease entity and the lease-with-parties projection

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{calendar_date, money, reference_id, ValidationError};

/// Status assigned to newly created leases
pub const LEASE_ACTIVE: &str = "Active";

/// Binds one tenant to one property for a date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Lease {
    pub id: i64,
    pub property_id: i64,
    pub tenant_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub monthly_rent: f64,
    pub status: String,
}

/// Lease joined with tenant names and property name (INNER JOIN)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct LeaseWithParties {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub lease: Lease,
    pub first_name: String,
    pub last_name: String,
    pub property_name: String,
}

/// Validated input for inserting a lease
#[derive(Debug, Clone, PartialEq)]
pub struct NewLease {
    pub property_id: i64,
    pub tenant_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub monthly_rent: f64,
}

impl NewLease {
    pub fn new(
        property_id: i64,
        tenant_id: i64,
        start_date: &str,
        end_date: &str,
        monthly_rent: f64,
    ) -> Result<Self, ValidationError> {
        let (start, start_text) = calendar_date("start_date", start_date)?;
        let (end, end_text) = calendar_date("end_date", end_date)?;
        if end < start {
            return Err(ValidationError::OutOfRange {
                field: "end_date",
                reason: "cannot be before start_date",
            });
        }

        Ok(Self {
            property_id: reference_id("property_id", property_id)?,
            tenant_id: reference_id("tenant_id", tenant_id)?,
            start_date: start_text,
            end_date: end_text,
            monthly_rent: money("monthly_rent", monthly_rent)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_same_day_lease() {
        let lease = NewLease::new(1, 1, "2024-01-01", "2024-01-01", 900.0).unwrap();
        assert_eq!(lease.start_date, lease.end_date);
    }

    #[test]
    fn rejects_inverted_range() {
        let err = NewLease::new(1, 1, "2024-12-31", "2024-01-01", 900.0).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { field: "end_date", .. }));
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert!(matches!(
            NewLease::new(1, 1, "Jan 1", "2024-01-01", 900.0),
            Err(ValidationError::InvalidFormat { field: "start_date", .. })
        ));
    }
}
