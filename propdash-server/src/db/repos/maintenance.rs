//! Maintenance repository
//!
//! - list: INNER JOIN with property name, newest request first
//! - create: INSERT with status Open; created_at defaulted by storage

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{MaintenanceWithProperty, NewMaintenance, MAINTENANCE_OPEN};

/// Maintenance repository
pub struct MaintenanceRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MaintenanceRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Requests against existing properties, by created_at DESC then id DESC.
    pub async fn list(&self) -> Result<Vec<MaintenanceWithProperty>, DbError> {
        let rows = sqlx::query_as::<_, MaintenanceWithProperty>(
            r#"
            SELECT
                m.id, m.property_id, m.description, m.priority, m.status, m.created_at,
                p.name AS property_name
            FROM maintenance m
            JOIN properties p ON p.id = m.property_id
            ORDER BY m.created_at DESC, m.id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, request: &NewMaintenance) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO maintenance (property_id, description, priority, status) VALUES (?, ?, ?, ?)",
        )
        .bind(request.property_id)
        .bind(&request.description)
        .bind(request.priority)
        .bind(MAINTENANCE_OPEN)
        .execute(self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }
}
