//! Record store trait for shipping persistence.
//!
//! This module defines the core abstraction over the external key-value
//! backend that holds shipping records. The trait is deliberately minimal:
//! it provides exactly what the shipping lifecycle needs: create a record
//! under a fresh identifier, fetch it back, and overwrite its status.
//!
//! # Design
//!
//! - No validation happens here; the [`ShippingService`] validates before
//!   calling `create`. The store persists whatever it is given, which also
//!   serves as the test bypass path for seeding records in arbitrary states.
//! - `update_status` is a single backend write, not a read-modify-write.
//!   Concurrent processors racing on the same record are not guarded at this
//!   level; the backend's native atomicity is all there is.
//! - Records are never deleted.
//!
//! # Implementations
//!
//! - `InMemoryShippingStore` (in `shipline-testing`): fast, deterministic
//!   testing over a `HashMap`.
//!
//! Production backends (DynamoDB-style tables, SQL rows) live outside this
//! workspace and only need to satisfy this trait.
//!
//! [`ShippingService`]: crate::service::ShippingService

use crate::types::{NewShipping, ShippingId, ShippingRecord, ShippingStatus};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Errors that can occur during record store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No record exists under the given identifier.
    #[error("Shipping not found: {0}")]
    NotFound(ShippingId),

    /// Backend failure (connectivity, throttling, malformed response).
    ///
    /// Propagated unmodified to the caller; this core performs no retries.
    #[error("Store backend error: {0}")]
    Backend(String),
}

/// Persistence seam for shipping records.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so the service can hold them behind
/// `Arc<dyn ShippingStore>` and be used freely across async tasks.
///
/// # Dyn Compatibility
///
/// Methods return explicit `Pin<Box<dyn Future>>` instead of `async fn` to
/// keep the trait object-safe (`Arc<dyn ShippingStore>`).
pub trait ShippingStore: Send + Sync {
    /// Persist a new shipping record under a freshly generated identifier.
    ///
    /// The store owns identifier generation; callers never supply ids.
    /// Returns the identifier the record was persisted under.
    ///
    /// # Errors
    ///
    /// - [`StoreError::Backend`]: the write failed.
    fn create(
        &self,
        new: NewShipping,
    ) -> Pin<Box<dyn Future<Output = Result<ShippingId, StoreError>> + Send + '_>>;

    /// Fetch the record stored under `id`.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`]: no record under `id`.
    /// - [`StoreError::Backend`]: the read failed.
    fn get(
        &self,
        id: ShippingId,
    ) -> Pin<Box<dyn Future<Output = Result<ShippingRecord, StoreError>> + Send + '_>>;

    /// Overwrite the status of the record stored under `id`.
    ///
    /// This is a blind write: the previous status is not inspected. The
    /// service enforces transition rules before calling this.
    ///
    /// # Errors
    ///
    /// - [`StoreError::NotFound`]: no record under `id`.
    /// - [`StoreError::Backend`]: the write failed.
    fn update_status(
        &self,
        id: ShippingId,
        status: ShippingStatus,
    ) -> Pin<Box<dyn Future<Output = Result<(), StoreError>> + Send + '_>>;
}
