//! Create-request validation.
//!
//! Validation is an explicit function returning a structured list of
//! `(field, message)` failures, invoked before the domain record is
//! constructed. Fields arrive optional so that a missing field is a
//! field error rather than a deserialization failure.

use order_store::NewOrder;

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

/// The full set of failures for one create request. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Iterates the failures in field order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// A raw create-order request, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateOrder {
    pub customer_id: Option<String>,
    pub product_id: Option<i64>,
    pub quantity: Option<i32>,
}

impl CreateOrder {
    pub fn new(
        customer_id: Option<String>,
        product_id: Option<i64>,
        quantity: Option<i32>,
    ) -> Self {
        Self {
            customer_id,
            product_id,
            quantity,
        }
    }

    /// Validates every field and, when all pass, constructs the
    /// record the store will persist. All offending fields are
    /// reported at once.
    pub fn validate(self) -> Result<NewOrder, ValidationErrors> {
        let mut errors = Vec::new();

        let customer_id = match self.customer_id {
            Some(ref id) if !id.trim().is_empty() => Some(id.clone()),
            _ => {
                errors.push(FieldError {
                    field: "customerId",
                    message: "must not be blank",
                });
                None
            }
        };

        let product_id = match self.product_id {
            Some(id) => Some(id),
            None => {
                errors.push(FieldError {
                    field: "productId",
                    message: "must not be null",
                });
                None
            }
        };

        let quantity = match self.quantity {
            Some(q) if q >= 1 => Some(q),
            Some(_) => {
                errors.push(FieldError {
                    field: "quantity",
                    message: "must be greater than or equal to 1",
                });
                None
            }
            None => {
                errors.push(FieldError {
                    field: "quantity",
                    message: "must not be null",
                });
                None
            }
        };

        match (customer_id, product_id, quantity) {
            (Some(c), Some(p), Some(q)) => Ok(NewOrder::new(c, p, q)),
            _ => Err(ValidationErrors(errors)),
        }
    }
}
