//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Uses JOINs for list operations (no N+1)
//! - Relies on table constraints (no check-then-insert)
//! - Inserts take any executor so the seed batch can share them inside one transaction

pub mod properties;
pub mod tenants;
pub mod leases;
pub mod payments;
pub mod maintenance;
pub mod stats;

pub use properties::PropertyRepo;
pub use tenants::TenantRepo;
pub use leases::LeaseRepo;
pub use payments::PaymentRepo;
pub use maintenance::MaintenanceRepo;
pub use stats::StatsRepo;

use sqlx::error::ErrorKind;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    /// Unique, foreign-key, not-null or check constraint rejected a write
    #[error("constraint violation: {message}")]
    Constraint { message: String },

    #[error("failed to prepare database location: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return Self::Constraint {
                        message: db_err.message().to_owned(),
                    };
                }
                _ => {}
            }
        }
        Self::Sqlx(err)
    }
}

impl DbError {
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use tempfile::TempDir;

    use crate::db::Database;

    /// Fresh schema-initialised database in a temp dir. Keep the dir alive for the test.
    pub async fn empty_db() -> (TempDir, Database) {
        let dir = tempfile::tempdir().unwrap();
        let db = Database::connect(&dir.path().join("test.db"), 2)
            .await
            .unwrap();
        (dir, db)
    }

    /// Schema plus the demo data set.
    pub async fn seeded_db() -> (TempDir, Database) {
        let (dir, db) = empty_db().await;
        db.seed_if_empty().await.unwrap();
        (dir, db)
    }

    /// Run raw statements with foreign keys off, as a legacy or hand-edited file might contain.
    pub async fn write_unchecked(db: &Database, statements: &[&str]) {
        let mut conn = db.pool().acquire().await.unwrap();
        sqlx::query("PRAGMA foreign_keys = OFF")
            .execute(&mut *conn)
            .await
            .unwrap();
        for sql in statements {
            sqlx::query(sql).execute(&mut *conn).await.unwrap();
        }
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&mut *conn)
            .await
            .unwrap();
    }
}
