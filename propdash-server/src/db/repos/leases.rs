//! Lease repository
//!
//! - list: INNER JOIN to tenant and property, newest start date first
//! - create: INSERT with status Active

use sqlx::{Executor, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{LeaseWithParties, NewLease, LEASE_ACTIVE};

/// Lease repository
pub struct LeaseRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LeaseRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Leases whose tenant and property both exist, by start_date DESC then id DESC.
    pub async fn list(&self) -> Result<Vec<LeaseWithParties>, DbError> {
        let rows = sqlx::query_as::<_, LeaseWithParties>(
            r#"
            SELECT
                l.id, l.property_id, l.tenant_id, l.start_date, l.end_date,
                l.monthly_rent, l.status,
                t.first_name, t.last_name,
                p.name AS property_name
            FROM leases l
            JOIN tenants t ON t.id = l.tenant_id
            JOIN properties p ON p.id = l.property_id
            ORDER BY l.start_date DESC, l.id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, lease: &NewLease) -> Result<i64, DbError> {
        insert(self.pool, lease).await
    }
}

pub(crate) async fn insert<'e, E>(executor: E, lease: &NewLease) -> Result<i64, DbError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO leases (property_id, tenant_id, start_date, end_date, monthly_rent, status)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(lease.property_id)
    .bind(lease.tenant_id)
    .bind(&lease.start_date)
    .bind(&lease.end_date)
    .bind(lease.monthly_rent)
    .bind(LEASE_ACTIVE)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::seeded_db;

    #[tokio::test]
    async fn seeded_leases_newest_first() {
        let (_dir, db) = seeded_db().await;
        let leases = db.leases().list().await.unwrap();

        assert_eq!(leases.len(), 2);
        assert_eq!(leases[0].lease.start_date, "2024-02-01");
        assert_eq!(leases[0].first_name, "Jane");
        assert_eq!(leases[0].property_name, "Oak Ridge House");
        assert_eq!(leases[1].lease.start_date, "2024-01-01");
        assert_eq!(leases[1].lease.status, "Active");
    }

    #[tokio::test]
    async fn create_lease_for_existing_parties() {
        let (_dir, db) = seeded_db().await;
        let new = NewLease::new(3, 1, "2025-01-01", "2025-12-31", 1800.0).unwrap();
        let id = db.leases().create(&new).await.unwrap();

        let leases = db.leases().list().await.unwrap();
        assert_eq!(leases[0].lease.id, id);
        assert_eq!(leases[0].property_name, "Downtown Loft");
    }

    #[tokio::test]
    async fn unknown_tenant_is_rejected() {
        let (_dir, db) = seeded_db().await;
        let new = NewLease::new(3, 99, "2025-01-01", "2025-12-31", 1800.0).unwrap();

        assert!(db.leases().create(&new).await.unwrap_err().is_constraint());
        assert_eq!(db.leases().list().await.unwrap().len(), 2);
    }
}
