//! In-memory implementations of the shipping store and queue seams.
//!
//! Both are deterministic and self-contained, suitable for unit and
//! integration tests that exercise the full lifecycle without an external
//! backend. They also serve as reference implementations of the trait
//! contracts:
//!
//! - [`InMemoryShippingStore`] generates uuid-v4 identifiers and performs no
//!   validation, so tests can seed records in arbitrary states (past due
//!   dates, terminal statuses) through the regular `create` path.
//! - [`InMemoryShippingQueue`] is a FIFO that removes messages on receive,
//!   returning at most [`MAX_BATCH_SIZE`] identifiers per call.

use shipline_core::publisher::{MAX_BATCH_SIZE, MessageId, PublishError, ShippingPublisher};
use shipline_core::store::{ShippingStore, StoreError};
use shipline_core::types::{NewShipping, ShippingId, ShippingRecord, ShippingStatus};
use std::collections::{HashMap, VecDeque};
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

/// In-memory record store over a `HashMap`.
///
/// Identifier generation mirrors production stores: a fresh uuid-v4 per
/// record, assigned by the store, never by the caller.
#[derive(Debug, Default)]
pub struct InMemoryShippingStore {
    records: RwLock<HashMap<ShippingId, ShippingRecord>>,
}

impl InMemoryShippingStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

impl ShippingStore for InMemoryShippingStore {
    fn create(
        &self,
        new: NewShipping,
    ) -> Pin<Box<dyn Future<Output = Result<ShippingId, StoreError>> + Send + '_>> {
        Box::pin(async move {
            let shipping_id = ShippingId::new(Uuid::new_v4().to_string());
            let record = new.into_record(shipping_id.clone());
            self.records
                .write()
                .await
                .insert(shipping_id.clone(), record);
            Ok(shipping_id)
        })
    }

    fn get(
        &self,
        id: ShippingId,
    ) -> Pin<Box<dyn Future<Output = Result<ShippingRecord, StoreError>> + Send + '_>> {
        Box::pin(async move {
            self.records
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or(StoreError::NotFound(id))
        })
    }

    fn update_status(
        &self,
        id: ShippingId,
        status: ShippingStatus,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>> {
        Box::pin(async move {
            let mut records = self.records.write().await;
            match records.get_mut(&id) {
                Some(record) => {
                    record.status = status;
                    Ok(())
                },
                None => Err(StoreError::NotFound(id)),
            }
        })
    }
}

/// In-memory FIFO queue of shipping identifiers.
///
/// Messages are removed when received (no visibility timeout); a batch
/// returns at most [`MAX_BATCH_SIZE`] identifiers in publish order.
#[derive(Debug, Default)]
pub struct InMemoryShippingQueue {
    pending: Mutex<VecDeque<ShippingId>>,
    next_message: AtomicU64,
}

impl InMemoryShippingQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of messages waiting to be received.
    pub async fn pending(&self) -> usize {
        self.pending.lock().await.len()
    }
}

impl ShippingPublisher for InMemoryShippingQueue {
    fn publish(
        &self,
        id: ShippingId,
    ) -> Pin<Box<dyn Future<Output = Result<MessageId, PublishError>> + Send + '_>> {
        Box::pin(async move {
            self.pending.lock().await.push_back(id);
            let n = self.next_message.fetch_add(1, Ordering::SeqCst);
            Ok(MessageId::new(format!("mem-msg-{n}")))
        })
    }

    fn receive_batch(
        &self,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<ShippingId>, PublishError>> + Send + '_>> {
        Box::pin(async move {
            let mut pending = self.pending.lock().await;
            let count = pending.len().min(MAX_BATCH_SIZE);
            Ok(pending.drain(..count).collect())
        })
    }
}
