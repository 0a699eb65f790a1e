//! Checkout
//!
//! Turns the live cart plus the delivery form into a persisted [`Order`] and
//! empties the cart.

use std::sync::Arc;

use tracing::info;

use crate::{
    cart::CartManager,
    storage::{self, ORDER_KEY, Store},
};

pub mod errors;
pub mod form;
pub mod order;

pub use errors::CheckoutError;
pub use form::{CheckoutForm, FormField, PaymentMethod, ShippingAddress};
pub use order::Order;

/// Places orders from a cart.
#[derive(Clone)]
pub struct Checkout {
    store: Arc<dyn Store>,
}

impl std::fmt::Debug for Checkout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Checkout").finish_non_exhaustive()
    }
}

impl Checkout {
    /// Checkout saving orders to `store`.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Validate the form, save the order snapshot and reset the cart.
    ///
    /// The cart is only reset once the order has been saved. If the saved
    /// cart cannot be cleared afterwards the error is returned, so the same
    /// cart is not ordered twice unnoticed.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::InvalidForm`]: required fields are missing.
    /// - [`CheckoutError::EmptyCart`]: there is nothing to order.
    /// - [`CheckoutError::Pricing`]: the cart total cannot be computed.
    /// - [`CheckoutError::Storage`]: the order could not be saved or the saved
    ///   cart could not be cleared.
    pub fn submit(
        &self,
        cart: &mut CartManager,
        form: &CheckoutForm,
    ) -> Result<Order, CheckoutError> {
        let (address, payment_method) = form.validate()?;

        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let summary = cart.summary()?;
        let order = Order::new(address, payment_method, cart.items().to_vec(), &summary);

        storage::save_json(self.store.as_ref(), ORDER_KEY, &order)?;

        cart.try_reset_cart()?;

        info!(
            lines = order.items.len(),
            total = %order.total,
            payment_method = %order.payment_method,
            "order placed"
        );

        Ok(order)
    }

    /// The most recently submitted order, for the confirmation screen.
    ///
    /// # Errors
    ///
    /// Returns an error when the saved order cannot be read or decoded.
    pub fn last_order(&self) -> Result<Option<Order>, CheckoutError> {
        Ok(storage::load_json(self.store.as_ref(), ORDER_KEY)?)
    }
}
