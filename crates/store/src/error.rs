use thiserror::Error;

use common::InvalidStatus;

/// Errors that can occur when interacting with the order store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A persisted status column held a value outside the enumeration.
    #[error("Corrupt record: {0}")]
    CorruptStatus(#[from] InvalidStatus),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
