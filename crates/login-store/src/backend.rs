//! Credential store trait

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{CredentialRecord, StoredCredential};

/// Credential store trait
///
/// A store owns one collection of credential records. Lookups match the
/// username exactly (case-sensitive) and return typed records together with
/// their store-assigned identifiers.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find all records whose username equals `username`
    async fn find_by_username(&self, username: &str) -> Result<Vec<StoredCredential>, StoreError>;

    /// Insert a record, returning the identifier assigned by the store
    async fn insert(&self, record: &CredentialRecord) -> Result<String, StoreError>;
}
