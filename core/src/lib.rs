//! # Shipline Core
//!
//! Library core for a shipping lifecycle: validate shipping requests, persist
//! records through an abstract record store, publish creation events onto an
//! abstract queue, and later drain that queue to resolve each record to a
//! terminal status with time-based expiry.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────┐   create    ┌──────────────────┐
//! │ Client │────────────▶│ ShippingService  │
//! └────────┘             └───────┬──────────┘
//!                    validate    │
//!                                ▼
//!                   ┌─────────────────────┐
//!                   │ 1. ShippingStore    │◄─── persist record (Created)
//!                   └─────────┬───────────┘
//!                             ▼
//!                   ┌─────────────────────┐
//!                   │ 2. ShippingPublisher│◄─── enqueue shipping id
//!                   └─────────┬───────────┘
//!                             ▼
//!                    mark record InProgress
//!
//! later:  process_shipping_batch ─▶ receive_batch ─▶ per id:
//!         due date passed ? Failed : Completed
//! ```
//!
//! ## Seams
//!
//! The store and the queue are external services. This crate owns only their
//! capability traits ([`store::ShippingStore`], [`publisher::ShippingPublisher`])
//! plus the [`environment::Clock`] abstraction that keeps due-date decisions
//! deterministic under test. In-memory implementations live in
//! `shipline-testing`.
//!
//! ## Example
//!
//! ```ignore
//! use shipline_core::{OrderId, ShippingService, ShippingStatus};
//!
//! let service = ShippingService::new(store, publisher);
//! let id = service
//!     .create_shipping("Нова Пошта", vec!["prod-1".into()], OrderId::new("ord-1".into()), due)
//!     .await?;
//! assert_eq!(service.check_status(&id).await?, ShippingStatus::InProgress);
//!
//! let outcomes = service.process_shipping_batch().await?;
//! assert!(outcomes.iter().all(|o| o.status.is_terminal()));
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};

pub mod environment;
pub mod publisher;
pub mod service;
pub mod store;
pub mod types;

pub use publisher::{MAX_BATCH_SIZE, MessageId, PublishError, ShippingPublisher};
pub use service::{ProcessedShipping, ShippingError, ShippingService};
pub use store::{ShippingStore, StoreError};
pub use types::{
    AVAILABLE_SHIPPING_TYPES, NewShipping, OrderId, ShippingId, ShippingRecord, ShippingStatus,
};
