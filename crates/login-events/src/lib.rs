//! Login Service Event Notifications
//!
//! This crate provides the notification sink abstraction used to announce
//! account lifecycle events to downstream consumers.

pub mod error;
pub mod publisher;

pub use error::NotifyError;
pub use publisher::{EventPublisher, LogPublisher};
