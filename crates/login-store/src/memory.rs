//! In-memory credential store

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use crate::backend::CredentialStore;
use crate::error::StoreError;
use crate::models::{CredentialRecord, StoredCredential};

/// In-memory credential store
///
/// Behaves like a schemaless document collection: records are keyed by a
/// generated UUID and no uniqueness constraint is applied to usernames.
/// Nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, CredentialRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Remove every record
    pub fn clear(&self) {
        self.records.write().clear();
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn find_by_username(&self, username: &str) -> Result<Vec<StoredCredential>, StoreError> {
        let records = self.records.read();
        Ok(records
            .iter()
            .filter(|(_, record)| record.username == username)
            .map(|(id, record)| StoredCredential {
                id: id.clone(),
                record: record.clone(),
            })
            .collect())
    }

    async fn insert(&self, record: &CredentialRecord) -> Result<String, StoreError> {
        let id = Uuid::new_v4().to_string();
        self.records.write().insert(id.clone(), record.clone());
        debug!("Stored credentials for {} in memory ({})", record.username, id);
        Ok(id)
    }
}
