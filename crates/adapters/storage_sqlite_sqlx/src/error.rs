//! Storage adapter error types.

use homegate_domain::error::GatewayError;

/// Errors specific to the `SQLite` adapter.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failure from sqlx.
    #[error("database query failed")]
    Query(#[from] sqlx::Error),

    /// An embedded migration failed to apply.
    #[error("database migration failed")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for GatewayError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
