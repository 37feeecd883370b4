//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoginError {
    #[error("A user already exists with username '{0}'")]
    DuplicateUser(String),

    #[error("No user found with this username")]
    UserNotFound,

    #[error("Secure random source failed: {0}")]
    RandomSource(String),

    #[error("Store error: {0}")]
    Store(#[from] login_store::StoreError),
}
