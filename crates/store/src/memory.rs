use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::OrderId;

use crate::{
    NewOrder, OrderRecord, Result,
    store::{Mutator, OrderStore, PageSlice},
};

struct Inner {
    next_id: i64,
    orders: BTreeMap<i64, OrderRecord>,
}

/// In-memory order store for tests and local runs.
///
/// Backed by a `BTreeMap` keyed by id, so listing order equals
/// insertion order. The write lock serializes all mutations, which
/// satisfies the per-record atomicity the interface requires.
#[derive(Clone)]
pub struct InMemoryOrderStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryOrderStore {
    /// Creates a new empty in-memory order store.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                next_id: 1,
                orders: BTreeMap::new(),
            })),
        }
    }

    /// Returns the total number of records stored.
    pub async fn order_count(&self) -> usize {
        self.inner.read().await.orders.len()
    }

    /// Clears all records. The id counter is not reset.
    pub async fn clear(&self) {
        self.inner.write().await.orders.clear();
    }
}

impl Default for InMemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn insert(&self, new: NewOrder) -> Result<OrderRecord> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;

        let record = new.into_record(OrderId::new(id));
        inner.orders.insert(id, record.clone());
        Ok(record)
    }

    async fn fetch(&self, id: OrderId) -> Result<Option<OrderRecord>> {
        let inner = self.inner.read().await;
        Ok(inner.orders.get(&id.as_i64()).cloned())
    }

    async fn list_page(&self, page: u32, size: u32) -> Result<PageSlice> {
        let inner = self.inner.read().await;
        let offset = page as usize * size as usize;
        let records: Vec<OrderRecord> = inner
            .orders
            .values()
            .skip(offset)
            .take(size as usize)
            .cloned()
            .collect();

        Ok(PageSlice {
            records,
            total: inner.orders.len() as u64,
        })
    }

    async fn update(&self, id: OrderId, mutator: Mutator) -> Result<Option<OrderRecord>> {
        let mut inner = self.inner.write().await;
        let Some(record) = inner.orders.get_mut(&id.as_i64()) else {
            return Ok(None);
        };

        mutator(record);
        Ok(Some(record.clone()))
    }
}
