//! Shared types for the orderflow services.

mod types;

pub use types::{InvalidStatus, OrderId, OrderStatus};
