//! Checkout errors.

use thiserror::Error;

use crate::{pricing::PricingError, storage::StoreError};

use super::form::FormField;

/// Errors that can occur when placing an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Required form fields are missing.
    #[error("missing required fields: {}", join_fields(.0))]
    InvalidForm(Vec<FormField>),

    /// There is nothing to order.
    #[error("the cart is empty")]
    EmptyCart,

    /// The cart total could not be computed.
    #[error("failed to price the cart")]
    Pricing(#[from] PricingError),

    /// The order could not be saved or the saved cart could not be cleared.
    #[error("failed to save the order")]
    Storage(#[from] StoreError),
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_form_lists_fields() {
        let error = CheckoutError::InvalidForm(vec![FormField::PostalCode, FormField::City]);

        assert_eq!(
            error.to_string(),
            "missing required fields: postal code, city"
        );
    }
}
