//! Property repository
//!
//! - list: every row in id order
//! - create: INSERT, new id returned

use sqlx::{Executor, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{NewProperty, Property};

/// Property repository
pub struct PropertyRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PropertyRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// All properties in storage order.
    pub async fn list(&self) -> Result<Vec<Property>, DbError> {
        let rows = sqlx::query_as::<_, Property>(
            r#"
            SELECT id, name, address, type, rent_amount, status
            FROM properties
            ORDER BY id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, property: &NewProperty) -> Result<i64, DbError> {
        insert(self.pool, property).await
    }
}

pub(crate) async fn insert<'e, E>(executor: E, property: &NewProperty) -> Result<i64, DbError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO properties (name, address, type, rent_amount, status) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&property.name)
    .bind(&property.address)
    .bind(&property.kind)
    .bind(property.rent_amount)
    .bind(property.status)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::{empty_db, seeded_db};
    use crate::models::PropertyStatus;

    #[tokio::test]
    async fn create_then_list() {
        let (_dir, db) = empty_db().await;
        let repo = db.properties();

        let new = NewProperty::new("Downtown Loft", "789 Main St", "Loft", 1800.0).unwrap();
        let id = repo.create(&new).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].kind, "Loft");
        assert_eq!(all[0].status, PropertyStatus::Available);
    }

    #[tokio::test]
    async fn list_is_in_id_order() {
        let (_dir, db) = seeded_db().await;
        let names: Vec<_> = db
            .properties()
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            names,
            ["Sunset Apartments - Unit 101", "Oak Ridge House", "Downtown Loft"]
        );
    }

    #[tokio::test]
    async fn ids_are_unique_and_increasing() {
        let (_dir, db) = empty_db().await;
        let repo = db.properties();
        let new = NewProperty::new("A", "1 Street", "House", 10.0).unwrap();

        let first = repo.create(&new).await.unwrap();
        let second = repo.create(&new).await.unwrap();
        assert!(second > first);
    }
}
