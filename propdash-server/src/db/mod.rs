//! Database layer - connection pool, schema, seed data and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default) - no Arc<Mutex<Connection>>
//! - All list operations use JOINs - no N+1 queries
//! - Rely on DB constraints, handle violations - no check-then-insert
//! - Transactions for multi-step operations

pub mod pool;
pub mod repos;
pub mod seed;

use std::path::Path;

use propdash_core::DatabaseSection;
use sqlx::SqlitePool;

pub use pool::create_pool;
pub use repos::*;
pub use seed::SeedOutcome;

const SCHEMA: &str = include_str!("schema.sql");

/// Handle to the property store. Cheap to clone; clones share the pool.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open the store described by the `[database]` config section.
    pub async fn open(section: &DatabaseSection) -> Result<Self, DbError> {
        Self::connect(&section.path, section.max_connections).await
    }

    /// Open (creating if needed) the SQLite file at `path` and apply the schema.
    pub async fn connect(path: &Path, max_connections: u32) -> Result<Self, DbError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        let pool = create_pool(path, max_connections).await?;
        let db = Self { pool };
        db.initialize_schema().await?;

        tracing::info!(path = %path.display(), max_connections, "database ready");
        Ok(db)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create all tables and indexes that do not exist yet.
    pub async fn initialize_schema(&self) -> Result<(), DbError> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert the demo data set when the store has no properties.
    pub async fn seed_if_empty(&self) -> Result<SeedOutcome, DbError> {
        seed::seed_if_empty(&self.pool).await
    }

    pub fn properties(&self) -> PropertyRepo<'_> {
        PropertyRepo::new(&self.pool)
    }

    pub fn tenants(&self) -> TenantRepo<'_> {
        TenantRepo::new(&self.pool)
    }

    pub fn leases(&self) -> LeaseRepo<'_> {
        LeaseRepo::new(&self.pool)
    }

    pub fn payments(&self) -> PaymentRepo<'_> {
        PaymentRepo::new(&self.pool)
    }

    pub fn maintenance(&self) -> MaintenanceRepo<'_> {
        MaintenanceRepo::new(&self.pool)
    }

    pub fn stats(&self) -> StatsRepo<'_> {
        StatsRepo::new(&self.pool)
    }

    /// Wait for in-flight queries and close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::debug!("database closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn connect_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("store.db");

        let db = Database::connect(&path, 1).await.unwrap();
        assert!(path.exists());
        db.close().await;
    }

    #[tokio::test]
    async fn schema_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::connect(&dir.path().join("s.db"), 1).await.unwrap();

        db.initialize_schema().await.unwrap();
        db.initialize_schema().await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(db.pool())
        .await
        .unwrap();
        assert_eq!(
            tables,
            ["leases", "maintenance", "payments", "properties", "tenants"]
        );
    }

    #[tokio::test]
    async fn reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("persist.db");

        let db = Database::connect(&path, 1).await.unwrap();
        db.seed_if_empty().await.unwrap();
        db.close().await;

        let section = DatabaseSection {
            path: path.clone(),
            max_connections: 1,
            seed_on_startup: false,
        };
        let db = Database::open(&section).await.unwrap();
        assert_eq!(db.properties().list().await.unwrap().len(), 3);
    }
}
