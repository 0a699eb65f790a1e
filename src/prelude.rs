//! Coffee Cart prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{CartLineItem, CartManager},
    catalog::{CatalogClient, CatalogError, HttpCatalogClient, HttpCatalogConfig},
    checkout::{Checkout, CheckoutError, CheckoutForm, Order, PaymentMethod, ShippingAddress},
    notices::{Notice, NoticeLog, Notifier, TracingNotifier},
    pricing::{CartSummary, PricingError},
    products::{CatalogProduct, ProductId, Stock},
    storage::{CART_KEY, FileStore, MemoryStore, ORDER_KEY, Store, StoreError},
};
