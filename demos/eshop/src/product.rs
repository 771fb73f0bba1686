//! Products with shared stock tracking.
//!
//! A [`Product`] is a cheap-to-clone handle over shared stock state: the cart
//! holds the same handle the shop does, so buying through an order is visible
//! to every holder. Equality and hashing go by product name.

use crate::types::Money;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Requested more units than the product has in stock.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Product {name} has only {available} items available, requested {requested}")]
pub struct OutOfStock {
    /// Product name
    pub name: String,
    /// Units currently in stock
    pub available: u32,
    /// Units requested
    pub requested: u32,
}

#[derive(Debug)]
struct Stock {
    available_amount: u32,
}

/// A purchasable product with a name, a unit price, and a stock level.
#[derive(Debug, Clone)]
pub struct Product {
    name: Arc<str>,
    price: Money,
    stock: Arc<Mutex<Stock>>,
}

impl Product {
    /// Creates a product with the given starting stock.
    #[must_use]
    pub fn new(name: &str, price: Money, available_amount: u32) -> Self {
        Self {
            name: Arc::from(name),
            price,
            stock: Arc::new(Mutex::new(Stock { available_amount })),
        }
    }

    /// Product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[must_use]
    pub const fn price(&self) -> Money {
        self.price
    }

    /// Units currently in stock.
    #[must_use]
    pub fn available_amount(&self) -> u32 {
        self.lock_stock().available_amount
    }

    /// Whether `amount` units can currently be bought.
    #[must_use]
    pub fn is_available(&self, amount: u32) -> bool {
        self.lock_stock().available_amount >= amount
    }

    /// Remove `amount` units from stock.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfStock`] when fewer than `amount` units remain; stock is
    /// left unchanged in that case.
    pub fn buy(&self, amount: u32) -> Result<(), OutOfStock> {
        let mut stock = self.lock_stock();
        if stock.available_amount < amount {
            return Err(OutOfStock {
                name: self.name.to_string(),
                available: stock.available_amount,
                requested: amount,
            });
        }
        stock.available_amount -= amount;
        Ok(())
    }

    /// Return `amount` units to stock (order rollback path).
    pub(crate) fn restock(&self, amount: u32) {
        self.lock_stock().available_amount += amount;
    }

    // Poisoning only matters if a holder panicked mid-update; the stock
    // struct has no invariant a partial update could break.
    fn lock_stock(&self) -> MutexGuard<'_, Stock> {
        self.stock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("Test Product", Money::from_dollars(100), 10)
    }

    #[test]
    fn availability_boundaries() {
        let p = product();
        assert!(p.is_available(10));
        assert!(!p.is_available(11));
        assert!(p.is_available(0));
    }

    #[test]
    fn buy_decrements_stock() {
        let p = product();
        p.buy(3).unwrap();
        assert_eq!(p.available_amount(), 7);
    }

    #[test]
    fn buy_more_than_available_fails() {
        let p = product();
        let err = p.buy(20).unwrap_err();
        assert_eq!(err.available, 10);
        assert_eq!(err.requested, 20);
        // Stock untouched after the failed buy.
        assert_eq!(p.available_amount(), 10);
    }

    #[test]
    fn clones_share_stock() {
        let p = product();
        let handle = p.clone();
        handle.buy(4).unwrap();
        assert_eq!(p.available_amount(), 6);
    }

    #[test]
    fn equality_is_by_name() {
        let a = Product::new("Widget", Money::from_dollars(1), 1);
        let b = Product::new("Widget", Money::from_dollars(99), 50);
        let c = Product::new("Other Product", Money::from_dollars(1), 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_is_the_name() {
        assert_eq!(product().to_string(), "Test Product");
    }
}
