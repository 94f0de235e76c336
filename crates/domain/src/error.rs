//! Domain error types.

use thiserror::Error;

use common::OrderId;
use order_store::StoreError;

use crate::validation::ValidationErrors;

/// Errors that can occur during order logic operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A create request failed field-level validation.
    #[error("Validation failed")]
    Validation(ValidationErrors),

    /// No order exists under the requested identifier.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// An error occurred in the order store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation(errors)
    }
}
