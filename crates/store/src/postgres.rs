use async_trait::async_trait;
use sqlx::{PgPool, Row, postgres::PgRow};

use common::OrderId;

use crate::{
    NewOrder, OrderRecord, Result,
    store::{Mutator, OrderStore, PageSlice},
};

/// PostgreSQL-backed order store.
///
/// Identifiers come from the table's `BIGSERIAL` column; `update`
/// takes a row lock (`SELECT ... FOR UPDATE`) so concurrent writes to
/// the same record are serialized.
#[derive(Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    fn row_to_record(row: PgRow) -> Result<OrderRecord> {
        let status: String = row.try_get("status")?;

        Ok(OrderRecord {
            id: OrderId::new(row.try_get("id")?),
            customer_id: row.try_get("customer_id")?,
            product_id: row.try_get("product_id")?,
            quantity: row.try_get("quantity")?,
            status: status.parse()?,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn insert(&self, new: NewOrder) -> Result<OrderRecord> {
        let status = new.status_or_default();
        let created_at = new.created_at_or_now();

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO orders (customer_id, product_id, quantity, status, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&new.customer_id)
        .bind(new.product_id)
        .bind(new.quantity)
        .bind(status.as_str())
        .bind(created_at)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id, "order row inserted");

        Ok(OrderRecord {
            id: OrderId::new(id),
            customer_id: new.customer_id,
            product_id: new.product_id,
            quantity: new.quantity,
            status,
            created_at,
        })
    }

    async fn fetch(&self, id: OrderId) -> Result<Option<OrderRecord>> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, product_id, quantity, status, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_record).transpose()
    }

    async fn list_page(&self, page: u32, size: u32) -> Result<PageSlice> {
        let offset = i64::from(page) * i64::from(size);

        let rows = sqlx::query(
            r#"
            SELECT id, customer_id, product_id, quantity, status, created_at
            FROM orders
            ORDER BY id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(i64::from(size))
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        let records = rows
            .into_iter()
            .map(Self::row_to_record)
            .collect::<Result<Vec<_>>>()?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(PageSlice {
            records,
            total: total as u64,
        })
    }

    async fn update(&self, id: OrderId, mutator: Mutator) -> Result<Option<OrderRecord>> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query(
            r#"
            SELECT id, customer_id, product_id, quantity, status, created_at
            FROM orders
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let mut record = Self::row_to_record(row)?;
        mutator(&mut record);

        sqlx::query(
            r#"
            UPDATE orders
            SET customer_id = $2, product_id = $3, quantity = $4, status = $5, created_at = $6
            WHERE id = $1
            "#,
        )
        .bind(record.id.as_i64())
        .bind(&record.customer_id)
        .bind(record.product_id)
        .bind(record.quantity)
        .bind(record.status.as_str())
        .bind(record.created_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some(record))
    }
}
