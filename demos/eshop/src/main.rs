//! End-to-end demo: fill a cart, place an order, drain the shipping queue.

use anyhow::Result;
use chrono::Duration;
use eshop_demo::{Money, Order, Product, ShoppingCart};
use shipline_core::environment::{Clock, SystemClock};
use shipline_core::{ShippingPublisher, ShippingService, ShippingStore};
use shipline_testing::{InMemoryShippingQueue, InMemoryShippingStore};
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let store = Arc::new(InMemoryShippingStore::new());
    let queue = Arc::new(InMemoryShippingQueue::new());
    let service = Arc::new(ShippingService::new(
        Arc::clone(&store) as Arc<dyn ShippingStore>,
        Arc::clone(&queue) as Arc<dyn ShippingPublisher>,
    ));

    let keyboard = Product::new("Keyboard", Money::from_dollars(40), 10);
    let mouse = Product::new("Mouse", Money::from_dollars(25), 10);

    let mut cart = ShoppingCart::new();
    cart.add_product(&keyboard, 1)?;
    cart.add_product(&mouse, 2)?;
    info!(total = %cart.calculate_total(), "cart ready");

    let mut order = Order::new(cart, Arc::clone(&service));
    let due_date = SystemClock.now() + Duration::days(1);
    let shipping_id = order.place_order("Нова Пошта", due_date).await?;
    info!(%shipping_id, status = %service.check_status(&shipping_id).await?, "order placed");

    for outcome in service.process_shipping_batch().await? {
        info!(shipping_id = %outcome.shipping_id, status = %outcome.status, "processed");
    }

    Ok(())
}
