//! Event publisher trait

use async_trait::async_trait;
use tracing::info;

use crate::error::NotifyError;

/// Event publisher trait
///
/// Implementations deliver a string payload to a named topic. Delivery is
/// fire-and-forget from the caller's point of view: callers decide whether
/// a failed publish matters.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish a payload to a topic
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), NotifyError>;
}

/// Event sink that only writes events to the log
#[derive(Debug, Clone, Default)]
pub struct LogPublisher;

impl LogPublisher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, topic: &str, payload: &str) -> Result<(), NotifyError> {
        info!("Event [{}]: {}", topic, payload);
        Ok(())
    }
}
