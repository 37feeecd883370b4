//! Event outbox operations

use async_trait::async_trait;
use chrono::Utc;
use login_events::{EventPublisher, NotifyError};
use sqlx::Row;

use crate::error::StoreError;
use crate::models::LoginEvent;
use crate::utils::format_datetime;

use super::Database;

impl Database {
    // ==================== Outbox Operations ====================

    /// Append an event to the outbox
    pub async fn insert_event(&self, topic: &str, payload: &str) -> Result<LoginEvent, StoreError> {
        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO login_events (timestamp, topic, payload)
            VALUES (?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(format_datetime(&now))
        .bind(topic)
        .bind(payload)
        .fetch_one(&self.pool)
        .await?;

        let id: i64 = result.get("id");

        Ok(LoginEvent {
            id,
            timestamp: now,
            topic: topic.to_string(),
            payload: payload.to_string(),
        })
    }

    /// List outbox events, newest first, optionally filtered by topic
    pub async fn list_events(
        &self,
        topic: Option<&str>,
        limit: i64,
    ) -> Result<Vec<LoginEvent>, StoreError> {
        let rows = match topic {
            Some(topic) => {
                sqlx::query(
                    r#"
                    SELECT id, timestamp, topic, payload
                    FROM login_events
                    WHERE topic = ?
                    ORDER BY id DESC
                    LIMIT ?
                    "#,
                )
                .bind(topic)
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    SELECT id, timestamp, topic, payload
                    FROM login_events
                    ORDER BY id DESC
                    LIMIT ?
                    "#,
                )
                .bind(limit)
                .fetch_all(&self.pool)
                .await?
            }
        };

        rows.iter()
            .map(|row| {
                LoginEvent::try_from(row).map_err(|e| StoreError::Decode(e.to_string()))
            })
            .collect()
    }
}

#[async_trait]
impl EventPublisher for Database {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), NotifyError> {
        self.insert_event(topic, payload)
            .await
            .map(|_| ())
            .map_err(|e| NotifyError::Publish(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_publish_appends_to_outbox() {
        let db = Database::in_memory().await.unwrap();
        db.publish("login-events", "created: 1").await.unwrap();
        db.publish("login-events", "created: 2").await.unwrap();
        db.publish("other", "ignored").await.unwrap();

        let events = db.list_events(Some("login-events"), 10).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].payload, "created: 2");
        assert_eq!(events[1].payload, "created: 1");

        let all = db.list_events(None, 10).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].topic, "other");
    }

    #[tokio::test]
    async fn test_list_events_respects_limit() {
        let db = Database::in_memory().await.unwrap();
        for i in 0..5 {
            db.insert_event("login-events", &format!("created: {}", i))
                .await
                .unwrap();
        }

        let events = db.list_events(None, 2).await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].payload, "created: 4");
    }

    #[tokio::test]
    async fn test_corrupt_event_timestamp_is_a_decode_error() {
        let db = Database::in_memory().await.unwrap();
        sqlx::query("INSERT INTO login_events (timestamp, topic, payload) VALUES (?, ?, ?)")
            .bind("bad")
            .bind("login-events")
            .bind("created: 1")
            .execute(db.pool())
            .await
            .unwrap();

        let result = db.list_events(None, 10).await;
        assert!(matches!(result, Err(StoreError::Decode(_))));
    }

    #[tokio::test]
    async fn test_publish_fails_when_pool_closed() {
        let db = Database::in_memory().await.unwrap();
        db.pool().close().await;

        let result = db.publish("login-events", "created: 1").await;
        assert!(matches!(result, Err(NotifyError::Publish(_))));
    }
}
