//! Orders: turn a cart into bought stock plus a shipping request.

use crate::cart::ShoppingCart;
use crate::product::{OutOfStock, Product};
use chrono::{DateTime, Utc};
use shipline_core::{OrderId, ShippingError, ShippingId, ShippingService};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

/// Errors surfaced when placing an order.
#[derive(Error, Debug)]
pub enum OrderError {
    /// A cart line could no longer be supplied from stock.
    #[error(transparent)]
    OutOfStock(#[from] OutOfStock),

    /// The shipping service rejected the request or a backend failed.
    #[error(transparent)]
    Shipping(#[from] ShippingError),
}

/// An order over a cart, fulfilled through the shipping service.
pub struct Order {
    order_id: OrderId,
    cart: ShoppingCart,
    shipping_service: Arc<ShippingService>,
}

impl Order {
    /// Creates an order for the given cart with a fresh order id.
    #[must_use]
    pub fn new(cart: ShoppingCart, shipping_service: Arc<ShippingService>) -> Self {
        Self {
            order_id: OrderId::new(Uuid::new_v4().to_string()),
            cart,
            shipping_service,
        }
    }

    /// This order's identifier.
    #[must_use]
    pub const fn order_id(&self) -> &OrderId {
        &self.order_id
    }

    /// The cart backing this order.
    #[must_use]
    pub const fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Buy every cart line, create a shipping for the bought products, and
    /// clear the cart.
    ///
    /// Stock moves first; if the shipping service then rejects the request,
    /// the bought amounts are restocked and the cart is left intact.
    ///
    /// # Errors
    ///
    /// - [`OrderError::OutOfStock`]: a line exceeds current stock; earlier
    ///   lines of the same order are restocked.
    /// - [`OrderError::Shipping`]: validation or backend failure from the
    ///   shipping service.
    pub async fn place_order(
        &mut self,
        shipping_type: &str,
        due_date: DateTime<Utc>,
    ) -> Result<ShippingId, OrderError> {
        let mut bought: Vec<(Product, u32)> = Vec::new();
        for line in self.cart.lines() {
            if let Err(err) = line.product.buy(line.amount) {
                for (product, amount) in bought {
                    product.restock(amount);
                }
                return Err(err.into());
            }
            bought.push((line.product.clone(), line.amount));
        }

        let products: Vec<String> = bought
            .iter()
            .map(|(product, _)| product.name().to_string())
            .collect();

        let shipping_id = match self
            .shipping_service
            .create_shipping(shipping_type, products, self.order_id.clone(), due_date)
            .await
        {
            Ok(id) => id,
            Err(err) => {
                for (product, amount) in bought {
                    product.restock(amount);
                }
                return Err(err.into());
            },
        };

        self.cart.clear();
        info!(order_id = %self.order_id, shipping_id = %shipping_id, "order placed");
        Ok(shipping_id)
    }
}
