//! Demo data set loaded into an empty store
//!
//! Gate: property count is zero. All rows go in one transaction, so a failed
//! seed leaves nothing behind.

use sqlx::SqlitePool;

use super::repos::{leases, payments, properties, tenants, DbError};
use crate::models::{NewLease, NewPayment, NewProperty, NewTenant, PropertyStatus};

/// Result of a seed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Store already had properties; nothing written
    Skipped { existing_properties: i64 },
    Seeded {
        properties: usize,
        tenants: usize,
        leases: usize,
        payments: usize,
    },
}

struct SeedProperty {
    name: &'static str,
    address: &'static str,
    kind: &'static str,
    rent: f64,
    status: PropertyStatus,
}

struct SeedTenant {
    first: &'static str,
    last: &'static str,
    email: &'static str,
    phone: &'static str,
    /// Index into PROPERTIES
    property: usize,
}

struct SeedLease {
    /// Index into TENANTS; the lease is on that tenant's property
    tenant: usize,
    start: &'static str,
    end: &'static str,
    rent: f64,
}

struct SeedPayment {
    /// Index into LEASES
    lease: usize,
    amount: f64,
    date: &'static str,
}

const PROPERTIES: &[SeedProperty] = &[
    SeedProperty {
        name: "Sunset Apartments - Unit 101",
        address: "123 Sunset Blvd, Los Angeles, CA 90028",
        kind: "Apartment",
        rent: 1200.0,
        status: PropertyStatus::Occupied,
    },
    SeedProperty {
        name: "Oak Ridge House",
        address: "456 Oak Ridge Dr, Austin, TX 78701",
        kind: "House",
        rent: 2500.0,
        status: PropertyStatus::Occupied,
    },
    SeedProperty {
        name: "Downtown Loft",
        address: "789 Main St, Seattle, WA 98101",
        kind: "Loft",
        rent: 1800.0,
        status: PropertyStatus::Available,
    },
];

const TENANTS: &[SeedTenant] = &[
    SeedTenant {
        first: "John",
        last: "Doe",
        email: "john.doe@example.com",
        phone: "555-0101",
        property: 0,
    },
    SeedTenant {
        first: "Jane",
        last: "Smith",
        email: "jane.smith@example.com",
        phone: "555-0102",
        property: 1,
    },
];

const LEASES: &[SeedLease] = &[
    SeedLease {
        tenant: 0,
        start: "2024-01-01",
        end: "2024-12-31",
        rent: 1200.0,
    },
    SeedLease {
        tenant: 1,
        start: "2024-02-01",
        end: "2025-01-31",
        rent: 2500.0,
    },
];

const PAYMENTS: &[SeedPayment] = &[
    SeedPayment {
        lease: 0,
        amount: 1200.0,
        date: "2024-02-01",
    },
    SeedPayment {
        lease: 1,
        amount: 2500.0,
        date: "2024-02-05",
    },
];

pub(crate) async fn seed_if_empty(pool: &SqlitePool) -> Result<SeedOutcome, DbError> {
    let mut tx = pool.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM properties")
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        tracing::debug!(existing, "store already populated, skipping seed");
        return Ok(SeedOutcome::Skipped {
            existing_properties: existing,
        });
    }

    let mut property_ids = Vec::with_capacity(PROPERTIES.len());
    for p in PROPERTIES {
        let new = NewProperty::new(p.name, p.address, p.kind, p.rent)
            .map_err(invalid_seed)?
            .with_status(p.status);
        property_ids.push(properties::insert(&mut *tx, &new).await?);
    }

    let mut tenant_ids = Vec::with_capacity(TENANTS.len());
    for t in TENANTS {
        let new = NewTenant::new(
            t.first,
            t.last,
            t.email,
            Some(t.phone),
            Some(property_ids[t.property]),
        )
        .map_err(invalid_seed)?;
        tenant_ids.push(tenants::insert(&mut *tx, &new).await?);
    }

    let mut lease_ids = Vec::with_capacity(LEASES.len());
    for l in LEASES {
        let property_id = property_ids[TENANTS[l.tenant].property];
        let new = NewLease::new(property_id, tenant_ids[l.tenant], l.start, l.end, l.rent)
            .map_err(invalid_seed)?;
        lease_ids.push(leases::insert(&mut *tx, &new).await?);
    }

    for p in PAYMENTS {
        let new = NewPayment::new(lease_ids[p.lease], p.amount, p.date).map_err(invalid_seed)?;
        payments::insert(&mut *tx, &new).await?;
    }

    tx.commit().await?;

    let outcome = SeedOutcome::Seeded {
        properties: PROPERTIES.len(),
        tenants: TENANTS.len(),
        leases: LEASES.len(),
        payments: PAYMENTS.len(),
    };
    tracing::info!(?outcome, "seeded demo data");
    Ok(outcome)
}

fn invalid_seed(err: crate::models::ValidationError) -> DbError {
    DbError::Constraint {
        message: format!("seed row failed validation: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::empty_db;

    async fn counts(pool: &SqlitePool) -> (i64, i64, i64, i64) {
        sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM properties),
                (SELECT COUNT(*) FROM tenants),
                (SELECT COUNT(*) FROM leases),
                (SELECT COUNT(*) FROM payments)
            "#,
        )
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn seeds_empty_store() {
        let (_dir, db) = empty_db().await;
        let outcome = db.seed_if_empty().await.unwrap();

        assert_eq!(
            outcome,
            SeedOutcome::Seeded {
                properties: 3,
                tenants: 2,
                leases: 2,
                payments: 2
            }
        );
        assert_eq!(counts(db.pool()).await, (3, 2, 2, 2));
    }

    #[tokio::test]
    async fn seeding_twice_is_a_no_op() {
        let (_dir, db) = empty_db().await;
        db.seed_if_empty().await.unwrap();
        let second = db.seed_if_empty().await.unwrap();

        assert_eq!(
            second,
            SeedOutcome::Skipped {
                existing_properties: 3
            }
        );
        assert_eq!(counts(db.pool()).await, (3, 2, 2, 2));
    }

    #[tokio::test]
    async fn any_existing_property_blocks_seed() {
        let (_dir, db) = empty_db().await;
        let lone = NewProperty::new("Lone Cabin", "1 Pine Rd", "Cabin", 700.0).unwrap();
        db.properties().create(&lone).await.unwrap();

        assert!(matches!(
            db.seed_if_empty().await.unwrap(),
            SeedOutcome::Skipped { existing_properties: 1 }
        ));
        assert_eq!(counts(db.pool()).await, (1, 0, 0, 0));
    }

    #[tokio::test]
    async fn seed_rolls_back_on_conflict() {
        let (_dir, db) = empty_db().await;
        // Occupy a seed email without creating any property
        let squatter = NewTenant::new("Other", "Person", "jane.smith@example.com", None, None)
            .unwrap();
        db.tenants().create(&squatter).await.unwrap();

        let err = db.seed_if_empty().await.unwrap_err();
        assert!(err.is_constraint());
        assert_eq!(counts(db.pool()).await, (0, 1, 0, 0));
    }
}
