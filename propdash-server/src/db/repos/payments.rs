//! Payment repository
//!
//! - list: INNER JOIN through lease to tenant and property, newest first
//! - create: INSERT with status Paid

use sqlx::{Executor, Sqlite, SqlitePool};

use super::DbError;
use crate::models::{NewPayment, PaymentWithParties, PAYMENT_PAID};

/// Payment repository
pub struct PaymentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PaymentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Payments with a complete lease chain, by payment_date DESC then id DESC.
    pub async fn list(&self) -> Result<Vec<PaymentWithParties>, DbError> {
        let rows = sqlx::query_as::<_, PaymentWithParties>(
            r#"
            SELECT
                pay.id, pay.lease_id, pay.amount, pay.payment_date, pay.status,
                t.first_name, t.last_name,
                p.name AS property_name
            FROM payments pay
            JOIN leases l ON l.id = pay.lease_id
            JOIN tenants t ON t.id = l.tenant_id
            JOIN properties p ON p.id = l.property_id
            ORDER BY pay.payment_date DESC, pay.id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn create(&self, payment: &NewPayment) -> Result<i64, DbError> {
        insert(self.pool, payment).await
    }
}

pub(crate) async fn insert<'e, E>(executor: E, payment: &NewPayment) -> Result<i64, DbError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let result = sqlx::query(
        "INSERT INTO payments (lease_id, amount, payment_date, status) VALUES (?, ?, ?, ?)",
    )
    .bind(payment.lease_id)
    .bind(payment.amount)
    .bind(&payment.payment_date)
    .bind(PAYMENT_PAID)
    .execute(executor)
    .await?;

    Ok(result.last_insert_rowid())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::test_support::{seeded_db, write_unchecked};

    #[tokio::test]
    async fn seeded_payments_newest_first() {
        let (_dir, db) = seeded_db().await;
        let payments = db.payments().list().await.unwrap();

        assert_eq!(payments.len(), 2);
        assert_eq!(payments[0].payment.payment_date, "2024-02-05");
        assert_eq!(payments[0].first_name, "Jane");
        assert_eq!(payments[0].last_name, "Smith");
        assert_eq!(payments[0].property_name, "Oak Ridge House");
        assert_eq!(payments[0].payment.amount, 2500.0);

        assert_eq!(payments[1].payment.payment_date, "2024-02-01");
        assert_eq!(payments[1].first_name, "John");
        assert_eq!(payments[1].property_name, "Sunset Apartments - Unit 101");
        assert_eq!(payments[1].payment.status, "Paid");
    }

    #[tokio::test]
    async fn same_date_breaks_tie_by_newest_id() {
        let (_dir, db) = seeded_db().await;
        let repo = db.payments();
        let first = repo.create(&NewPayment::new(1, 10.0, "2024-03-01").unwrap()).await.unwrap();
        let second = repo.create(&NewPayment::new(2, 20.0, "2024-03-01").unwrap()).await.unwrap();

        let payments = repo.list().await.unwrap();
        assert_eq!(payments[0].payment.id, second);
        assert_eq!(payments[1].payment.id, first);
    }

    #[tokio::test]
    async fn unknown_lease_is_rejected() {
        let (_dir, db) = seeded_db().await;
        let err = db
            .payments()
            .create(&NewPayment::new(77, 10.0, "2024-03-01").unwrap())
            .await
            .unwrap_err();
        assert!(err.is_constraint());
    }

    #[tokio::test]
    async fn broken_lease_chain_is_left_out() {
        let (_dir, db) = seeded_db().await;
        write_unchecked(
            &db,
            &[
                // lease 3 points at a tenant that does not exist
                "INSERT INTO leases (id, property_id, tenant_id, start_date, end_date, monthly_rent) \
                 VALUES (3, 3, 99, '2024-01-01', '2024-12-31', 1800)",
                "INSERT INTO payments (lease_id, amount, payment_date) VALUES (3, 1800, '2024-04-01')",
                // lease 42 does not exist at all
                "INSERT INTO payments (lease_id, amount, payment_date) VALUES (42, 500, '2024-05-01')",
            ],
        )
        .await;

        let payments = db.payments().list().await.unwrap();
        assert_eq!(payments.len(), 2);
        assert!(payments.iter().all(|p| p.payment.lease_id <= 2));
        assert_eq!(payments[0].payment.payment_date, "2024-02-05");
    }
}
