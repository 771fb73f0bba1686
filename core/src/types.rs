//! Core domain types for the shipping lifecycle.
//!
//! A shipping record tracks one shipment from creation to a terminal state:
//! `Created → InProgress → (Completed | Failed)`. Records carry the carrier
//! type, the products being shipped, the originating order, and a due date
//! used by the processing step to decide between completion and expiry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a shipping record.
///
/// Identifiers are generated by the record store on creation (uuid-v4 in the
/// provided implementations) and are opaque to the service layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShippingId(String);

impl ShippingId {
    /// Creates a new `ShippingId` from a string
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

impl fmt::Display for ShippingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for the order a shipment belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(String);

impl OrderId {
    /// Creates a new `OrderId` from a string
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

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The fixed catalog of carrier names accepted by the shipping service.
///
/// Process-wide constant, never mutated at runtime. The service rejects any
/// shipping type outside this set.
pub const AVAILABLE_SHIPPING_TYPES: [&str; 4] =
    ["Нова Пошта", "Укр Пошта", "Meest Express", "Самовивіз"];

/// Status of a shipping record in its lifecycle.
///
/// `Completed` and `Failed` are terminal: once reached, a record never
/// transitions again.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShippingStatus {
    /// Record persisted, creation event not yet acknowledged
    #[serde(rename = "created")]
    Created,
    /// Creation event published; awaiting processing
    #[serde(rename = "in progress")]
    InProgress,
    /// Processed before the due date
    #[serde(rename = "completed")]
    Completed,
    /// Due date elapsed before processing
    #[serde(rename = "failed")]
    Failed,
}

impl ShippingStatus {
    /// Returns the wire representation used by record store backends.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Whether this status permits no further transitions.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl fmt::Display for ShippingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A persisted shipping record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingRecord {
    /// Store-generated identifier
    pub shipping_id: ShippingId,
    /// Carrier name (one of [`AVAILABLE_SHIPPING_TYPES`] on the service path)
    pub shipping_type: String,
    /// Product references included in the shipment
    pub products: Vec<String>,
    /// Order this shipment fulfills
    pub order_id: OrderId,
    /// Current lifecycle status
    pub status: ShippingStatus,
    /// Deadline for processing; past-due records fail
    pub due_date: DateTime<Utc>,
}

/// Fields required to create a shipping record.
///
/// The record store assigns the identifier; everything else is provided by
/// the caller. No validation happens at this level; the service validates
/// before constructing a `NewShipping`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewShipping {
    /// Carrier name
    pub shipping_type: String,
    /// Product references included in the shipment
    pub products: Vec<String>,
    /// Order this shipment fulfills
    pub order_id: OrderId,
    /// Initial status
    pub status: ShippingStatus,
    /// Processing deadline
    pub due_date: DateTime<Utc>,
}

impl NewShipping {
    /// Creates a new shipping request with the given fields
    #[must_use]
    pub const fn new(
        shipping_type: String,
        products: Vec<String>,
        order_id: OrderId,
        status: ShippingStatus,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            shipping_type,
            products,
            order_id,
            status,
            due_date,
        }
    }

    /// Builds the record persisted under `shipping_id`.
    #[must_use]
    pub fn into_record(self, shipping_id: ShippingId) -> ShippingRecord {
        ShippingRecord {
            shipping_id,
            shipping_type: self.shipping_type,
            products: self.products,
            order_id: self.order_id,
            status: self.status,
            due_date: self.due_date,
        }
    }
}
