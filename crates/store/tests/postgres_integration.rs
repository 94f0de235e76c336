//! PostgreSQL integration tests.
//!
//! These tests use a shared PostgreSQL container and are ignored by
//! default because they need a local Docker daemon. Run with:
//!
//! ```bash
//! cargo test -p order-store --test postgres_integration -- --ignored --test-threads=1
//! ```

use std::sync::Arc;

use chrono::{DateTime, Utc};
use common::{OrderId, OrderStatus};
use order_store::{NewOrder, OrderStore, PgOrderStore};
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and a cleared table
async fn get_test_store() -> PgOrderStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    let store = PgOrderStore::new(pool.clone());
    store.run_migrations().await.unwrap();

    sqlx::query("TRUNCATE TABLE orders RESTART IDENTITY")
        .execute(&pool)
        .await
        .unwrap();

    store
}

#[tokio::test]
#[serial]
#[ignore = "requires a local Docker daemon"]
async fn insert_assigns_sequential_ids_and_defaults() {
    let store = get_test_store().await;

    let first = store.insert(NewOrder::new("cust-1", 100, 2)).await.unwrap();
    let second = store.insert(NewOrder::new("cust-2", 101, 1)).await.unwrap();

    assert_eq!(first.id, OrderId::new(1));
    assert_eq!(second.id, OrderId::new(2));
    assert_eq!(first.status, OrderStatus::Pending);
    assert!(first.created_at <= Utc::now());
}

#[tokio::test]
#[serial]
#[ignore = "requires a local Docker daemon"]
async fn insert_keeps_explicit_status_and_created_at() {
    let store = get_test_store().await;
    let ts: DateTime<Utc> = "2026-02-28T03:00:00Z".parse().unwrap();

    let record = store
        .insert(
            NewOrder::new("cust-x", 200, 5)
                .with_status(OrderStatus::Confirmed)
                .with_created_at(ts),
        )
        .await
        .unwrap();

    assert_eq!(record.status, OrderStatus::Confirmed);
    assert_eq!(record.created_at, ts);

    let fetched = store.fetch(record.id).await.unwrap().unwrap();
    assert_eq!(fetched, record);
}

#[tokio::test]
#[serial]
#[ignore = "requires a local Docker daemon"]
async fn fetch_missing_id_returns_none() {
    let store = get_test_store().await;
    assert!(store.fetch(OrderId::new(404)).await.unwrap().is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires a local Docker daemon"]
async fn list_page_slices_in_id_order() {
    let store = get_test_store().await;
    for i in 0..5 {
        store
            .insert(NewOrder::new(format!("c{i}"), i, 1))
            .await
            .unwrap();
    }

    let page = store.list_page(1, 2).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.records.len(), 2);
    assert_eq!(page.records[0].id, OrderId::new(3));
    assert_eq!(page.records[1].id, OrderId::new(4));
}

#[tokio::test]
#[serial]
#[ignore = "requires a local Docker daemon"]
async fn update_rewrites_status_atomically() {
    let store = get_test_store().await;
    let inserted = store.insert(NewOrder::new("c1", 10, 3)).await.unwrap();

    let updated = store
        .update(
            inserted.id,
            Box::new(|r| r.status = OrderStatus::Cancelled),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Cancelled);
    assert_eq!(updated.created_at, inserted.created_at);

    let missing = store
        .update(OrderId::new(999), Box::new(|r| r.quantity = 1))
        .await
        .unwrap();
    assert!(missing.is_none());
}
