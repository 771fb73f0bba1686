//! Integration tests for the shipping lifecycle.
//!
//! Bottom-up: the store and queue fakes are exercised directly first, then
//! the service on top of them: validation, creation bookkeeping, expiry,
//! and batch draining.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use chrono::{DateTime, Duration, Utc};
use shipline_core::environment::Clock;
use shipline_core::{
    NewShipping, OrderId, ShippingId, ShippingPublisher, ShippingService, ShippingStatus,
    ShippingStore, StoreError,
};
use shipline_testing::{
    FixedClock, InMemoryShippingQueue, InMemoryShippingStore, init_test_tracing, test_clock,
};
use std::sync::Arc;

// ============================================================================
// Test Fixtures
// ============================================================================

struct Harness {
    store: Arc<InMemoryShippingStore>,
    queue: Arc<InMemoryShippingQueue>,
    clock: FixedClock,
    service: ShippingService,
}

fn harness() -> Harness {
    init_test_tracing();
    let store = Arc::new(InMemoryShippingStore::new());
    let queue = Arc::new(InMemoryShippingQueue::new());
    let clock = test_clock();
    let service = ShippingService::with_clock(
        Arc::clone(&store) as Arc<dyn ShippingStore>,
        Arc::clone(&queue) as Arc<dyn ShippingPublisher>,
        Arc::new(clock.clone()),
    );
    Harness {
        store,
        queue,
        clock,
        service,
    }
}

fn order_id(id: &str) -> OrderId {
    OrderId::new(id.to_string())
}

/// Bypass path: seed a record directly through the store, skipping service
/// validation (arbitrary status and due date allowed).
async fn seed(
    store: &InMemoryShippingStore,
    order: &str,
    status: ShippingStatus,
    due_date: DateTime<Utc>,
) -> ShippingId {
    store
        .create(NewShipping::new(
            "Нова Пошта".to_string(),
            vec!["p1".to_string()],
            order_id(order),
            status,
            due_date,
        ))
        .await
        .unwrap()
}

// ============================================================================
// Record store (bottom-up)
// ============================================================================

#[tokio::test]
async fn store_creates_record() {
    let h = harness();
    let due = h.clock.now() + Duration::days(1);

    let id = seed(&h.store, "ord-db", ShippingStatus::Created, due).await;

    let record = h.store.get(id.clone()).await.unwrap();
    assert_eq!(record.shipping_id, id);
    assert_eq!(record.order_id.as_str(), "ord-db");
    assert_eq!(record.status, ShippingStatus::Created);
    assert_eq!(record.due_date, due);
}

#[tokio::test]
async fn store_updates_status() {
    let h = harness();
    let id = seed(&h.store, "ord-upd", ShippingStatus::Created, h.clock.now()).await;

    h.store
        .update_status(id.clone(), ShippingStatus::Completed)
        .await
        .unwrap();

    let saved = h.store.get(id).await.unwrap();
    assert_eq!(saved.status, ShippingStatus::Completed);
}

// ============================================================================
// Event publisher (bottom-up)
// ============================================================================

#[tokio::test]
async fn publisher_enqueues_message() {
    let h = harness();
    let test_id = ShippingId::new("ship-queue-1".to_string());

    let msg_id = h.queue.publish(test_id.clone()).await.unwrap();
    assert!(!msg_id.as_str().is_empty());

    let received = h.queue.receive_batch().await.unwrap();
    assert!(received.contains(&test_id));
}

// ============================================================================
// Service validation
// ============================================================================

#[tokio::test]
async fn create_shipping_with_past_date_fails() {
    let h = harness();
    let past_date = h.clock.now() - Duration::days(1);

    let err = h
        .service
        .create_shipping("Meest Express", vec!["p1".to_string()], order_id("ord1"), past_date)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("must be greater than datetime now"));
}

#[tokio::test]
async fn create_shipping_invalid_type_fails() {
    let h = harness();
    let future_date = h.clock.now() + Duration::days(1);

    let err = h
        .service
        .create_shipping("InvalidType", vec!["p1".to_string()], order_id("ord1"), future_date)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("Shipping type is not available"));
}

// ============================================================================
// Full lifecycle
// ============================================================================

#[tokio::test]
async fn create_and_check_status() {
    let h = harness();
    let future_date = h.clock.now() + Duration::days(1);

    let id = h
        .service
        .create_shipping("Самовивіз", vec!["p1".to_string()], order_id("ord1"), future_date)
        .await
        .unwrap();

    // Right after creation the record is already in progress.
    let status = h.service.check_status(&id).await.unwrap();
    assert_eq!(status, ShippingStatus::InProgress);
}

#[tokio::test]
async fn process_shipping_fails_if_expired() {
    let h = harness();
    let id = seed(
        &h.store,
        "ord_exp",
        ShippingStatus::Created,
        h.clock.now() - Duration::seconds(1),
    )
    .await;

    h.service.process_shipping(&id).await.unwrap();

    let status = h.service.check_status(&id).await.unwrap();
    assert_eq!(status, ShippingStatus::Failed);
}

#[tokio::test]
async fn process_shipping_completes_if_valid() {
    let h = harness();
    let id = seed(
        &h.store,
        "ord_ok",
        ShippingStatus::Created,
        h.clock.now() + Duration::days(1),
    )
    .await;

    h.service.process_shipping(&id).await.unwrap();

    let status = h.service.check_status(&id).await.unwrap();
    assert_eq!(status, ShippingStatus::Completed);
}

#[tokio::test]
async fn process_shipping_batch_drains_queue() {
    let h = harness();
    let future_date = h.clock.now() + Duration::days(1);

    let id = h
        .service
        .create_shipping("Meest Express", vec!["p1".to_string()], order_id("ord_batch"), future_date)
        .await
        .unwrap();

    let outcomes = h.service.process_shipping_batch().await.unwrap();

    assert!(outcomes.iter().any(|o| o.shipping_id == id));
    assert!(outcomes.iter().all(|o| o.status.is_terminal()));
    assert_eq!(h.queue.pending().await, 0);

    let status = h.service.check_status(&id).await.unwrap();
    assert_eq!(status, ShippingStatus::Completed);
}

#[tokio::test]
async fn batch_resolves_mixed_due_dates() {
    let h = harness();

    let ok = h
        .service
        .create_shipping(
            "Укр Пошта",
            vec!["p1".to_string()],
            order_id("ord_mixed_ok"),
            h.clock.now() + Duration::days(1),
        )
        .await
        .unwrap();
    // Expired record queued through the bypass path.
    let expired = seed(
        &h.store,
        "ord_mixed_exp",
        ShippingStatus::Created,
        h.clock.now() - Duration::hours(1),
    )
    .await;
    h.queue.publish(expired.clone()).await.unwrap();

    let outcomes = h.service.process_shipping_batch().await.unwrap();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(h.service.check_status(&ok).await.unwrap(), ShippingStatus::Completed);
    assert_eq!(
        h.service.check_status(&expired).await.unwrap(),
        ShippingStatus::Failed
    );
}

#[tokio::test]
async fn check_status_unknown_id_fails() {
    let h = harness();

    let err = h
        .service
        .check_status(&ShippingId::new("no-such-shipping".to_string()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        shipline_core::ShippingError::Store(StoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn list_available_shipping_types() {
    let types = ShippingService::list_available_shipping_type();
    assert!(types.contains(&"Нова Пошта"));
    assert_eq!(types.len(), 4);
}
