//! Store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    #[error("Failed to decode record: {0}")]
    Decode(String),

    #[error("Store backend error: {0}")]
    Backend(String),

    #[error("Migration error: {0}")]
    Migration(String),
}
