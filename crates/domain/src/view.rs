//! The externally visible order representation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::{OrderId, OrderStatus};
use order_store::OrderRecord;

/// Order representation returned to API clients.
///
/// Field names follow the wire contract (camelCase); `created_at`
/// serializes as an ISO-8601 UTC instant and `status` as its
/// enumeration name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderView {
    pub id: OrderId,
    pub customer_id: String,
    pub product_id: i64,
    pub quantity: i32,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl From<OrderRecord> for OrderView {
    fn from(record: OrderRecord) -> Self {
        Self {
            id: record.id,
            customer_id: record.customer_id,
            product_id: record.product_id,
            quantity: record.quantity,
            status: record.status,
            created_at: record.created_at,
        }
    }
}
