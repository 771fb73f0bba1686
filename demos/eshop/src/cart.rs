//! Shopping cart: product lines with amounts, priced on demand.

use crate::product::{OutOfStock, Product};
use crate::types::Money;
use std::collections::HashMap;

/// A line in the cart: one product and how many units of it.
#[derive(Debug, Clone)]
pub struct CartLine {
    /// The product (shared stock handle)
    pub product: Product,
    /// Units of the product in the cart
    pub amount: u32,
}

/// A shopping cart mapping products to requested amounts.
///
/// Adding a product checks current availability but reserves nothing; stock
/// only moves when an order is placed.
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    lines: HashMap<String, CartLine>,
}

impl ShoppingCart {
    /// Creates an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` units of `product` to the cart.
    ///
    /// Adding the same product again replaces the previous amount.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfStock`] when the product cannot currently supply
    /// `amount` units; the cart is left unchanged.
    pub fn add_product(&mut self, product: &Product, amount: u32) -> Result<(), OutOfStock> {
        if !product.is_available(amount) {
            return Err(OutOfStock {
                name: product.name().to_string(),
                available: product.available_amount(),
                requested: amount,
            });
        }
        self.lines.insert(
            product.name().to_string(),
            CartLine {
                product: product.clone(),
                amount,
            },
        );
        Ok(())
    }

    /// Remove a product from the cart. No-op when the product is absent.
    pub fn remove_product(&mut self, product: &Product) {
        self.lines.remove(product.name());
    }

    /// Whether the cart holds a line for `product`.
    #[must_use]
    pub fn contains_product(&self, product: &Product) -> bool {
        self.lines.contains_key(product.name())
    }

    /// Total price of the cart; an empty cart totals zero.
    #[must_use]
    pub fn calculate_total(&self) -> Money {
        self.lines
            .values()
            .map(|line| line.product.price().times(line.amount))
            .fold(Money::default(), |acc, line_total| acc.plus(line_total))
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the cart lines (no particular order).
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    /// Drop every line from the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
