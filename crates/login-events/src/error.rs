//! Notification error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to publish event: {0}")]
    Publish(String),

    #[error("Event sink unavailable: {0}")]
    Unavailable(String),
}
