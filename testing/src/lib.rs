//! # Shipline Testing
//!
//! Testing utilities for the shipping lifecycle core.
//!
//! This crate provides:
//! - In-memory implementations of the `ShippingStore` and `ShippingPublisher`
//!   seams (see [`memory`])
//! - A deterministic [`FixedClock`]
//! - A tracing initializer for test binaries
//!
//! ## Example
//!
//! ```
//! use shipline_core::{OrderId, ShippingService, ShippingStatus};
//! use shipline_testing::{InMemoryShippingQueue, InMemoryShippingStore, test_clock};
//! use shipline_core::environment::Clock;
//! use chrono::Duration;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), shipline_core::ShippingError> {
//! let clock = test_clock();
//! let service = ShippingService::with_clock(
//!     Arc::new(InMemoryShippingStore::new()),
//!     Arc::new(InMemoryShippingQueue::new()),
//!     Arc::new(clock.clone()),
//! );
//!
//! let id = service
//!     .create_shipping(
//!         "Нова Пошта",
//!         vec!["prod-1".to_string()],
//!         OrderId::new("order-1".to_string()),
//!         clock.now() + Duration::days(1),
//!     )
//!     .await?;
//! assert_eq!(service.check_status(&id).await?, ShippingStatus::InProgress);
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use shipline_core::environment::Clock;

pub mod memory;

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use shipline_testing::mocks::FixedClock;
    /// use shipline_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}

/// Install a compact tracing subscriber for test binaries.
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use memory::{InMemoryShippingQueue, InMemoryShippingStore};
pub use mocks::{FixedClock, test_clock};
