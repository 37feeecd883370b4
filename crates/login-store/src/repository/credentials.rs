//! Credential operations

use async_trait::async_trait;
use sqlx::Row;
use tracing::debug;

use crate::backend::CredentialStore;
use crate::error::StoreError;
use crate::models::{CredentialRecord, StoredCredential};
use crate::utils::format_datetime;

use super::Database;

impl Database {
    // ==================== Credential Operations ====================

    /// Get all credential rows for a username
    pub async fn get_credentials_by_username(
        &self,
        username: &str,
    ) -> Result<Vec<StoredCredential>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, password_hash, salt, created_at
            FROM credentials
            WHERE username = ?
            ORDER BY id
            "#,
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| {
                StoredCredential::try_from(row).map_err(|e| StoreError::Decode(e.to_string()))
            })
            .collect()
    }

    /// Insert a credential row
    pub async fn insert_credential(&self, record: &CredentialRecord) -> Result<i64, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO credentials (username, password_hash, salt, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&record.username)
        .bind(&record.password_hash)
        .bind(&record.salt)
        .bind(format_datetime(&record.created_at))
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                StoreError::Duplicate(format!("User '{}' already exists", record.username))
            }
            other => StoreError::Database(other),
        })?;

        let id: i64 = result.get("id");
        debug!("Inserted credentials for {} with id {}", record.username, id);
        Ok(id)
    }

    /// Count stored credential rows
    pub async fn count_credentials(&self) -> Result<i64, StoreError> {
        let result = sqlx::query("SELECT COUNT(*) as count FROM credentials")
            .fetch_one(&self.pool)
            .await?;
        Ok(result.get("count"))
    }
}

#[async_trait]
impl CredentialStore for Database {
    async fn find_by_username(&self, username: &str) -> Result<Vec<StoredCredential>, StoreError> {
        self.get_credentials_by_username(username).await
    }

    async fn insert(&self, record: &CredentialRecord) -> Result<String, StoreError> {
        self.insert_credential(record).await.map(|id| id.to_string())
    }
}
