//! Order logic layer.
//!
//! Sits between the HTTP API and the order store: validates create
//! requests beyond basic types, applies default field values through
//! the store's record factory, and converts persisted records into
//! the externally visible view shape.

pub mod error;
pub mod page;
pub mod service;
pub mod validation;
pub mod view;

pub use error::DomainError;
pub use page::Page;
pub use service::OrderService;
pub use validation::{CreateOrder, FieldError, ValidationErrors};
pub use view::OrderView;
