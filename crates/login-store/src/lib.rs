//! Login Service Credential Storage
//!
//! This crate provides the credential store abstraction for the login
//! service, with a SQLite backend (via sqlx) and an in-memory backend.

pub mod backend;
pub mod error;
pub mod memory;
pub mod models;
pub mod repository;
pub mod utils;

pub use backend::CredentialStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use models::*;
pub use repository::Database;
