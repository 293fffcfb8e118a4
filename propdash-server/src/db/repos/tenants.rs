//! Tenant repository
//!
//! - list: LEFT JOIN with property name, unassigned tenants included
//! - create: INSERT; duplicate email surfaces as a constraint violation

use sqlx::{Executor, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{NewTenant, TenantWithProperty};

/// Tenant repository
pub struct TenantRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> TenantRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Every tenant with the name of its property, `None` when unassigned.
    pub async fn list(&self) -> Result<Vec<TenantWithProperty>, DbError> {
        let rows = sqlx::query_as::<_, TenantWithProperty>(
            r#"
            SELECT
                t.id, t.first_name, t.last_name, t.email, t.phone, t.property_id,
                p.name AS property_name
            FROM tenants t
            LEFT JOIN properties p ON p.id = t.property_id
            ORDER BY t.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, tenant: &NewTenant) -> Result<i64, DbError> {
        insert(self.pool, tenant).await
    }
}

pub(crate) async fn insert<'e, E>(executor: E, tenant: &NewTenant) -> Result<i64, DbError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO tenants (first_name, last_name, email, phone, property_id) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&tenant.first_name)
    .bind(&tenant.last_name)
    .bind(tenant.email.as_str())
    .bind(tenant.phone.as_deref())
    .bind(tenant.property_id)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}
