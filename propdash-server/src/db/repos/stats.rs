//! Dashboard aggregates in a single round trip

use sqlx::SqlitePool;

use super::DbError;
use crate::models::{occupancy_rate, DashboardStats, MAINTENANCE_OPEN};

pub struct StatsRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> StatsRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn dashboard(&self) -> Result<DashboardStats, DbError> {
        let (total, occupied, revenue, open): (i64, i64, f64, i64) = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM properties) AS total_properties,
                (SELECT COUNT(*) FROM properties WHERE status = 'Occupied') AS occupied,
                (SELECT CAST(COALESCE(SUM(amount), 0) AS REAL) FROM payments) AS total_revenue,
                (SELECT COUNT(*) FROM maintenance WHERE status = ?) AS open_maintenance
            "#,
        )
        .bind(MAINTENANCE_OPEN)
        .fetch_one(self.pool)
        .await?;

        Ok(DashboardStats {
            total_properties: total,
            occupancy_rate: occupancy_rate(occupied, total),
            total_revenue: revenue,
            open_maintenance: open,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::db::repos::test_support::{empty_db, seeded_db};
    use crate::models::{DashboardStats, NewMaintenance};

    #[tokio::test]
    async fn empty_store_is_all_zero() {
        let (_dir, db) = empty_db().await;
        let stats = db.stats().dashboard().await.unwrap();
        assert_eq!(stats, DashboardStats::default());
    }

    #[tokio::test]
    async fn seeded_store_figures() {
        let (_dir, db) = seeded_db().await;
        let stats = db.stats().dashboard().await.unwrap();

        assert_eq!(stats.total_properties, 3);
        assert_eq!(stats.occupancy_rate, 67);
        assert_eq!(stats.total_revenue, 3700.0);
        assert_eq!(stats.open_maintenance, 0);
    }

    #[tokio::test]
    async fn counts_open_maintenance() {
        let (_dir, db) = seeded_db().await;
        db.maintenance()
            .create(&NewMaintenance::new(3, "Paint hallway", "Low").unwrap())
            .await
            .unwrap();

        assert_eq!(db.stats().dashboard().await.unwrap().open_maintenance, 1);
    }
}
