//! Persisted order record and its construction factory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use common::{OrderId, OrderStatus};

/// An order record as persisted by the store.
///
/// Everything except `status` is immutable after first persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Store-assigned identifier, strictly increasing per store.
    pub id: OrderId,

    /// Customer placing the order. Non-empty.
    pub customer_id: String,

    /// Product being ordered.
    pub product_id: i64,

    /// Quantity ordered. Always >= 1.
    pub quantity: i32,

    /// Lifecycle status. The only mutable field.
    pub status: OrderStatus,

    /// Creation instant. Set once, never rewritten.
    pub created_at: DateTime<Utc>,
}

/// An order record before the store has assigned an identifier.
///
/// `status` and `created_at` are optional: when absent they are filled
/// by the factory at record construction time, which is the single
/// point where defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: String,
    pub product_id: i64,
    pub quantity: i32,
    pub status: Option<OrderStatus>,
    pub created_at: Option<DateTime<Utc>>,
}

impl NewOrder {
    /// Creates a new order with defaults left for the factory to fill.
    pub fn new(customer_id: impl Into<String>, product_id: i64, quantity: i32) -> Self {
        Self {
            customer_id: customer_id.into(),
            product_id,
            quantity,
            status: None,
            created_at: None,
        }
    }

    /// Sets an explicit status, bypassing the `PENDING` default.
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets an explicit creation instant, bypassing the now() default.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Resolved status: the explicit value, or `PENDING`.
    pub fn status_or_default(&self) -> OrderStatus {
        self.status.unwrap_or_default()
    }

    /// Resolved creation instant: the explicit value, or now.
    pub fn created_at_or_now(&self) -> DateTime<Utc> {
        self.created_at.unwrap_or_else(Utc::now)
    }

    /// Factory turning this into a full record under the assigned id,
    /// filling `status`/`created_at` only when absent.
    pub fn into_record(self, id: OrderId) -> OrderRecord {
        let status = self.status_or_default();
        let created_at = self.created_at_or_now();
        OrderRecord {
            id,
            customer_id: self.customer_id,
            product_id: self.product_id,
            quantity: self.quantity,
            status,
            created_at,
        }
    }
}
