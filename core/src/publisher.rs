//! Event publisher trait for shipping creation events.
//!
//! When a shipping record is created, its identifier is published onto an
//! external queue. A later processing pass drains that queue in batches and
//! resolves each shipping to a terminal status.
//!
//! # Delivery Semantics
//!
//! The queue is assumed to provide **at-least-once delivery**: an identifier
//! may be received more than once (e.g. redelivery after a visibility
//! timeout). The service tolerates this: re-processing a record that is
//! already terminal is a no-op.
//!
//! Message bodies are opaque strings containing the shipping identifier;
//! removal/visibility semantics are delegated entirely to the backend.
//!
//! # Implementations
//!
//! - `InMemoryShippingQueue` (in `shipline-testing`): synchronous FIFO for
//!   deterministic tests.

use crate::types::ShippingId;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Upper bound on identifiers returned by a single [`receive_batch`] call.
///
/// Matches the batch cap typical queue backends impose on a single receive.
///
/// [`receive_batch`]: ShippingPublisher::receive_batch
pub const MAX_BATCH_SIZE: usize = 10;

/// Backend-assigned handle for a published message.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MessageId(String);

impl MessageId {
    /// Creates a new `MessageId` from a string
    #[must_use]
    pub const fn new(id: String) -> Self {
        Self(id)
    }

    /// Returns the inner string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur during publisher operations.
#[derive(Error, Debug)]
pub enum PublishError {
    /// Failed to enqueue a shipping identifier.
    #[error("Publish failed: {0}")]
    PublishFailed(String),

    /// Failed to receive a batch from the queue.
    #[error("Receive failed: {0}")]
    ReceiveFailed(String),
}

/// Queue seam for shipping creation events.
///
/// Implementations must be `Send + Sync`; methods return explicit
/// `Pin<Box<dyn Future>>` so the trait stays object-safe
/// (`Arc<dyn ShippingPublisher>`).
pub trait ShippingPublisher: Send + Sync {
    /// Enqueue `id` as an opaque message body.
    ///
    /// Returns the backend-assigned message handle.
    ///
    /// # Errors
    ///
    /// - [`PublishError::PublishFailed`]: the enqueue failed.
    fn publish(
        &self,
        id: ShippingId,
    ) -> Pin<Box<dyn Future<Output = Result<MessageId, PublishError>> + Send + '_>>;

    /// Dequeue up to [`MAX_BATCH_SIZE`] pending shipping identifiers.
    ///
    /// Returns a finite, non-restartable batch in queue order; empty when
    /// nothing is pending. Whether received messages become invisible or are
    /// removed outright is the backend's concern.
    ///
    /// # Errors
    ///
    /// - [`PublishError::ReceiveFailed`]: the receive failed.
    fn receive_batch(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ShippingId>, PublishError>> + Send + '_>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn publish_error_display() {
        let error = PublishError::PublishFailed("queue unavailable".to_string());
        assert!(format!("{error}").contains("queue unavailable"));
    }

    #[test]
    fn message_id_roundtrip() {
        let id = MessageId::new("msg-42".to_string());
        assert_eq!(id.as_str(), "msg-42");
        assert_eq!(id.to_string(), "msg-42");
    }
}
