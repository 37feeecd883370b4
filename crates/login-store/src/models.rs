//! Store models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::Row;
use std::fmt;

use crate::utils::parse_datetime;

/// Credential record
///
/// Serialized with the document field names used by the credential
/// collection (`UserName`, `PassHash`, `Salt`, `DateCreated`).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    #[serde(rename = "UserName")]
    pub username: String,
    /// Hex digest of `password + salt`
    #[serde(rename = "PassHash")]
    pub password_hash: String,
    /// Hex-encoded per-record salt
    #[serde(rename = "Salt")]
    pub salt: String,
    #[serde(rename = "DateCreated")]
    pub created_at: DateTime<Utc>,
}

impl CredentialRecord {
    pub fn new(
        username: impl Into<String>,
        password_hash: impl Into<String>,
        salt: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
            salt: salt.into(),
            created_at,
        }
    }
}

// The hash stays out of Debug output so records can be logged safely.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("salt", &self.salt)
            .field("created_at", &self.created_at)
            .finish()
    }
}

impl fmt::Display for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// A credential record together with its store-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCredential {
    pub id: String,
    pub record: CredentialRecord,
}

/// Event recorded in the database outbox
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginEvent {
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub topic: String,
    pub payload: String,
}

// ==================== TryFrom Implementations ====================

fn decode_datetime(row: &sqlx::sqlite::SqliteRow, column: &str) -> Result<DateTime<Utc>, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    parse_datetime(&raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))
}

impl TryFrom<&sqlx::sqlite::SqliteRow> for StoredCredential {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        let id: i64 = row.try_get("id")?;
        Ok(StoredCredential {
            id: id.to_string(),
            record: CredentialRecord {
                username: row.try_get("username")?,
                password_hash: row.try_get("password_hash")?,
                salt: row.try_get("salt")?,
                created_at: decode_datetime(row, "created_at")?,
            },
        })
    }
}

impl TryFrom<&sqlx::sqlite::SqliteRow> for LoginEvent {
    type Error = sqlx::Error;

    fn try_from(row: &sqlx::sqlite::SqliteRow) -> Result<Self, Self::Error> {
        Ok(LoginEvent {
            id: row.try_get("id")?,
            timestamp: decode_datetime(row, "timestamp")?,
            topic: row.try_get("topic")?,
            payload: row.try_get("payload")?,
        })
    }
}
