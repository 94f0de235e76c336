//! Order service providing the logic-layer API over a store.

use common::{OrderId, OrderStatus};
use order_store::OrderStore;

use crate::error::DomainError;
use crate::page::Page;
use crate::validation::CreateOrder;
use crate::view::OrderView;

/// Service for managing orders.
///
/// Wraps an [`OrderStore`] and exposes the four operations the API
/// layer needs: create, get by id, list a page, and update status.
pub struct OrderService<S: OrderStore> {
    store: S,
}

impl<S: OrderStore> OrderService<S> {
    /// Creates a new order service with the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates a create request, persists the record, and returns
    /// the stored representation with its assigned id and defaults.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, cmd: CreateOrder) -> Result<OrderView, DomainError> {
        let new = cmd.validate()?;
        let record = self.store.insert(new).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::debug!(id = %record.id, "order created");

        Ok(record.into())
    }

    /// Looks up an order by identifier.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<OrderView, DomainError> {
        let record = self
            .store
            .fetch(id)
            .await?
            .ok_or(DomainError::NotFound(id))?;

        Ok(record.into())
    }

    /// Returns one page of orders in storage order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, page: u32, size: u32) -> Result<Page<OrderView>, DomainError> {
        let slice = self.store.list_page(page, size).await?;

        let content = slice.records.into_iter().map(OrderView::from).collect();
        Ok(Page::new(content, page, size, slice.total))
    }

    /// Overwrites an order's status. Transitions are unconditional:
    /// any enumeration member may follow any other.
    #[tracing::instrument(skip(self))]
    pub async fn update_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderView, DomainError> {
        let record = self
            .store
            .update(id, Box::new(move |r| r.status = status))
            .await?
            .ok_or(DomainError::NotFound(id))?;

        metrics::counter!("order_status_updates_total").increment(1);

        Ok(record.into())
    }
}

#[cfg(test)]
mod tests {
    use order_store::InMemoryOrderStore;

    use super::*;

    fn valid_create() -> CreateOrder {
        CreateOrder::new(Some("cust-1".into()), Some(100), Some(2))
    }

    #[tokio::test]
    async fn create_assigns_id_and_defaults() {
        let service = OrderService::new(InMemoryOrderStore::new());

        let view = service.create(valid_create()).await.unwrap();

        assert_eq!(view.id, OrderId::new(1));
        assert_eq!(view.customer_id, "cust-1");
        assert_eq!(view.product_id, 100);
        assert_eq!(view.quantity, 2);
        assert_eq!(view.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn create_with_invalid_fields_reports_validation() {
        let service = OrderService::new(InMemoryOrderStore::new());

        let err = service
            .create(CreateOrder::new(None, None, Some(0)))
            .await
            .unwrap_err();

        let DomainError::Validation(errors) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["customerId", "productId", "quantity"]);
    }

    #[tokio::test]
    async fn get_returns_exactly_what_create_returned() {
        let service = OrderService::new(InMemoryOrderStore::new());

        let created = service.create(valid_create()).await.unwrap();
        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let service = OrderService::new(InMemoryOrderStore::new());

        let err = service.get(OrderId::new(42)).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(id) if id == OrderId::new(42)));
    }

    #[tokio::test]
    async fn list_returns_orders_in_store_order() {
        let service = OrderService::new(InMemoryOrderStore::new());
        service.create(valid_create()).await.unwrap();
        service
            .create(CreateOrder::new(Some("cust-2".into()), Some(101), Some(1)))
            .await
            .unwrap();

        let page = service.list(0, 10).await.unwrap();

        assert_eq!(page.total_elements, 2);
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.content[0].customer_id, "cust-1");
        assert_eq!(page.content[1].customer_id, "cust-2");
    }

    #[tokio::test]
    async fn update_status_changes_only_the_status() {
        let service = OrderService::new(InMemoryOrderStore::new());
        let created = service.create(valid_create()).await.unwrap();

        let updated = service
            .update_status(created.id, OrderStatus::Confirmed)
            .await
            .unwrap();

        assert_eq!(updated.status, OrderStatus::Confirmed);
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.customer_id, created.customer_id);
        assert_eq!(updated.created_at, created.created_at);
    }

    #[tokio::test]
    async fn update_status_allows_any_transition() {
        let service = OrderService::new(InMemoryOrderStore::new());
        let created = service.create(valid_create()).await.unwrap();

        service
            .update_status(created.id, OrderStatus::Cancelled)
            .await
            .unwrap();
        let back = service
            .update_status(created.id, OrderStatus::Pending)
            .await
            .unwrap();

        assert_eq!(back.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn update_status_missing_id_is_not_found() {
        let service = OrderService::new(InMemoryOrderStore::new());

        let err = service
            .update_status(OrderId::new(9), OrderStatus::Confirmed)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
