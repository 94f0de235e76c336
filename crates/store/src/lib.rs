//! Durable keyed storage for order records.
//!
//! Defines the [`OrderStore`] trait required by the order logic layer,
//! the persisted record shape, and two implementations: an in-memory
//! store for tests and local runs, and a PostgreSQL-backed store.

mod error;
mod memory;
mod postgres;
mod record;
mod store;

pub use error::{Result, StoreError};
pub use memory::InMemoryOrderStore;
pub use postgres::PgOrderStore;
pub use record::{NewOrder, OrderRecord};
pub use store::{Mutator, OrderStore, PageSlice};
