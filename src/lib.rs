//! Coffee Cart
//!
//! Shopping cart for a coffee-delivery storefront: a stock-aware cart state
//! manager backed by a remote catalog and a persistent key-value store, plus
//! the checkout that turns the cart into an order.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod notices;
pub mod pricing;
pub mod products;
pub mod storage;

pub mod prelude;
