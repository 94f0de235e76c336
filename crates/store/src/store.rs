//! The storage interface required by the order logic layer.

use async_trait::async_trait;

use common::OrderId;

use crate::{OrderRecord, Result, record::NewOrder};

/// Single-record mutation applied atomically by [`OrderStore::update`].
pub type Mutator = Box<dyn FnOnce(&mut OrderRecord) + Send>;

/// An ordered slice of records plus the total count in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice {
    /// Records in storage (id) order, within the requested window.
    pub records: Vec<OrderRecord>,
    /// Total number of records in the store, not just this slice.
    pub total: u64,
}

/// Durable keyed storage for order records.
///
/// Implementations must serialize writes per record: two concurrent
/// `update` calls for the same id may not lose either write. No
/// cross-record transactions are required.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Inserts a record, assigning a previously-unused, strictly
    /// increasing identifier. Durable once acknowledged.
    async fn insert(&self, new: NewOrder) -> Result<OrderRecord>;

    /// Fetches a record by identifier, `None` when absent.
    async fn fetch(&self, id: OrderId) -> Result<Option<OrderRecord>>;

    /// Returns the records in the zero-based `page` window of `size`
    /// entries, in id order, together with the total count.
    async fn list_page(&self, page: u32, size: u32) -> Result<PageSlice>;

    /// Atomically reads a record, applies `mutator`, and rewrites it.
    /// Returns the updated record, or `None` when the id is absent.
    async fn update(&self, id: OrderId, mutator: Mutator) -> Result<Option<OrderRecord>>;
}
