//! Orders

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{cart::CartLineItem, pricing::CartSummary};

use super::form::{PaymentMethod, ShippingAddress};

/// Immutable snapshot of the cart and delivery details taken at submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Where to deliver
    pub address: ShippingAddress,

    /// How the customer pays on delivery
    pub payment_method: PaymentMethod,

    /// Line items at submission time
    pub items: Vec<CartLineItem>,

    /// Subtotal in centavos
    pub subtotal_minor: i64,

    /// Delivery fee in centavos
    pub delivery_fee_minor: i64,

    /// Total in centavos
    pub total_minor: i64,

    /// Total formatted for display
    pub total: String,

    /// When the order was submitted
    pub placed_at: Timestamp,
}

impl Order {
    pub(crate) fn new(
        address: ShippingAddress,
        payment_method: PaymentMethod,
        items: Vec<CartLineItem>,
        summary: &CartSummary,
    ) -> Self {
        Self {
            address,
            payment_method,
            items,
            subtotal_minor: summary.subtotal.to_minor_units(),
            delivery_fee_minor: summary.delivery_fee.to_minor_units(),
            total_minor: summary.total.to_minor_units(),
            total: summary.total.to_string(),
            placed_at: Timestamp::now(),
        }
    }
}
