//! # E-shop Demo
//!
//! A small product / cart / order model that places orders through the
//! shipping lifecycle service. The shop side owns stock arithmetic; the
//! shipping side (carrier validation, due dates, status lifecycle) is
//! entirely `shipline-core`'s.
//!
//! Flow: fill a [`ShoppingCart`] with [`Product`]s, wrap it in an [`Order`],
//! and `place_order`: stock is bought, the cart is cleared, and a shipping
//! record is created and queued for processing.

pub mod cart;
pub mod order;
pub mod product;
pub mod types;

pub use cart::{CartLine, ShoppingCart};
pub use order::{Order, OrderError};
pub use product::{OutOfStock, Product};
pub use types::Money;
