//! Shipping service: validation, creation, and lifecycle processing.
//!
//! The service orchestrates the two external seams, [`ShippingStore`] and
//! [`ShippingPublisher`], around a small per-record state machine:
//!
//! ```text
//! Created ──(create bookkeeping)──▶ InProgress
//! Created | InProgress ──(process, due date in future)──▶ Completed
//! Created | InProgress ──(process, due date in past)───▶ Failed
//! ```
//!
//! `Completed` and `Failed` are terminal; re-processing a terminal record is
//! a no-op that returns the stored status.
//!
//! # Creation bookkeeping
//!
//! `create_shipping` persists the record with status `Created`, publishes the
//! identifier, then immediately marks the record `InProgress`. Callers
//! observing a freshly created shipping therefore see `InProgress` without
//! any processing step having run.
//!
//! # Concurrency
//!
//! Calls are logically sequential: each method awaits the store and/or
//! publisher and nothing else. Status updates are blind backend writes, so
//! two processors racing on the same identifier can both write a terminal
//! status; the terminal no-op check narrows but does not close that window.
//! Known limitation, inherited from the store contract.

use crate::environment::{Clock, SystemClock};
use crate::publisher::{PublishError, ShippingPublisher};
use crate::store::{ShippingStore, StoreError};
use crate::types::{
    AVAILABLE_SHIPPING_TYPES, NewShipping, OrderId, ShippingId, ShippingStatus,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors surfaced by [`ShippingService`] operations.
#[derive(Error, Debug)]
pub enum ShippingError {
    /// The requested carrier is not in the fixed catalog.
    #[error("Shipping type is not available: {0}")]
    TypeNotAvailable(String),

    /// The due date is not strictly in the future.
    #[error("Shipping due date {0} must be greater than datetime now")]
    DueDateNotInFuture(DateTime<Utc>),

    /// Record store failure, propagated unmodified.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Publisher failure, propagated unmodified.
    #[error(transparent)]
    Publisher(#[from] PublishError),
}

/// Outcome of processing one queued shipping identifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProcessedShipping {
    /// The identifier that was processed
    pub shipping_id: ShippingId,
    /// Status the record ended in
    pub status: ShippingStatus,
}

/// Orchestrates shipping validation, persistence, event publication, and
/// batch status resolution.
///
/// The service is cheap to clone-by-`Arc` and safe to share across tasks;
/// it holds no mutable state of its own.
///
/// # Example
///
/// ```ignore
/// use shipline_core::service::ShippingService;
///
/// let service = ShippingService::new(store, publisher);
/// let id = service
///     .create_shipping("Нова Пошта", vec!["prod-1".into()], order_id, due_date)
///     .await?;
/// assert_eq!(service.check_status(&id).await?, ShippingStatus::InProgress);
/// ```
pub struct ShippingService {
    store: Arc<dyn ShippingStore>,
    publisher: Arc<dyn ShippingPublisher>,
    clock: Arc<dyn Clock>,
}

impl ShippingService {
    /// Creates a service over the given store and publisher, using the
    /// system clock.
    #[must_use]
    pub fn new(store: Arc<dyn ShippingStore>, publisher: Arc<dyn ShippingPublisher>) -> Self {
        Self::with_clock(store, publisher, Arc::new(SystemClock))
    }

    /// Creates a service with an explicit clock (deterministic tests).
    #[must_use]
    pub fn with_clock(
        store: Arc<dyn ShippingStore>,
        publisher: Arc<dyn ShippingPublisher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            store,
            publisher,
            clock,
        }
    }

    /// The fixed catalog of carriers this service accepts.
    #[must_use]
    pub const fn list_available_shipping_type() -> [&'static str; 4] {
        AVAILABLE_SHIPPING_TYPES
    }

    /// Validate and create a shipping, publish its creation event, and mark
    /// it `InProgress`.
    ///
    /// Returns the store-generated identifier.
    ///
    /// # Errors
    ///
    /// - [`ShippingError::TypeNotAvailable`]: `shipping_type` is outside the
    ///   catalog.
    /// - [`ShippingError::DueDateNotInFuture`]: `due_date` is not strictly
    ///   after the current time.
    /// - [`ShippingError::Store`] / [`ShippingError::Publisher`]: backend
    ///   failures, unretried.
    pub async fn create_shipping(
        &self,
        shipping_type: &str,
        products: Vec<String>,
        order_id: OrderId,
        due_date: DateTime<Utc>,
    ) -> Result<ShippingId, ShippingError> {
        if !AVAILABLE_SHIPPING_TYPES.contains(&shipping_type) {
            return Err(ShippingError::TypeNotAvailable(shipping_type.to_string()));
        }
        if due_date <= self.clock.now() {
            return Err(ShippingError::DueDateNotInFuture(due_date));
        }

        let shipping_id = self
            .store
            .create(NewShipping::new(
                shipping_type.to_string(),
                products,
                order_id,
                ShippingStatus::Created,
                due_date,
            ))
            .await?;
        debug!(shipping_id = %shipping_id, shipping_type, "shipping record created");

        let message_id = self.publisher.publish(shipping_id.clone()).await?;
        debug!(shipping_id = %shipping_id, message_id = %message_id, "creation event published");

        // Creation bookkeeping: the record is considered in progress as soon
        // as its event is on the queue.
        self.store
            .update_status(shipping_id.clone(), ShippingStatus::InProgress)
            .await?;
        info!(shipping_id = %shipping_id, "shipping in progress");

        Ok(shipping_id)
    }

    /// Current status of the record stored under `id`.
    ///
    /// # Errors
    ///
    /// - [`ShippingError::Store`] with [`StoreError::NotFound`]: unknown id.
    pub async fn check_status(&self, id: &ShippingId) -> Result<ShippingStatus, ShippingError> {
        let record = self.store.get(id.clone()).await?;
        Ok(record.status)
    }

    /// Resolve one shipping to a terminal status.
    ///
    /// Past-due records fail; everything else completes. Records already in
    /// a terminal status are left untouched and their stored status is
    /// returned.
    ///
    /// # Errors
    ///
    /// - [`ShippingError::Store`] with [`StoreError::NotFound`]: unknown id.
    /// - [`ShippingError::Store`]: backend read/write failure.
    pub async fn process_shipping(&self, id: &ShippingId) -> Result<ShippingStatus, ShippingError> {
        let record = self.store.get(id.clone()).await?;
        if record.status.is_terminal() {
            debug!(shipping_id = %id, status = %record.status, "already terminal, skipping");
            return Ok(record.status);
        }

        let status = if record.due_date < self.clock.now() {
            warn!(shipping_id = %id, due_date = %record.due_date, "shipping expired");
            ShippingStatus::Failed
        } else {
            ShippingStatus::Completed
        };

        self.store.update_status(id.clone(), status).await?;
        info!(shipping_id = %id, status = %status, "shipping processed");
        Ok(status)
    }

    /// Drain the queue and process every received identifier sequentially.
    ///
    /// Outcomes are returned in received order. A failure on any identifier
    /// aborts the batch at that point; already-processed records keep their
    /// new status.
    ///
    /// # Errors
    ///
    /// - [`ShippingError::Publisher`]: the batch receive failed.
    /// - [`ShippingError::Store`]: processing an individual record failed.
    pub async fn process_shipping_batch(
        &self,
    ) -> Result<Vec<ProcessedShipping>, ShippingError> {
        let batch = self.publisher.receive_batch().await?;
        debug!(count = batch.len(), "processing shipping batch");

        let mut outcomes = Vec::with_capacity(batch.len());
        for shipping_id in batch {
            let status = self.process_shipping(&shipping_id).await?;
            outcomes.push(ProcessedShipping {
                shipping_id,
                status,
            });
        }
        Ok(outcomes)
    }
}
