//! Cart Line Items

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::products::{CatalogProduct, ProductId};

/// One product entry in the cart together with its purchased quantity.
///
/// The product fields are flattened on the wire, so a persisted line item
/// looks like the catalog record with an extra `amount` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    #[serde(flatten)]
    product: CatalogProduct,
    amount: NonZeroU32,
}

impl CartLineItem {
    /// Creates a line item holding a single unit of `product`.
    #[must_use]
    pub fn new(product: CatalogProduct) -> Self {
        Self::with_amount(product, NonZeroU32::MIN)
    }

    /// Creates a line item with the given quantity.
    #[must_use]
    pub fn with_amount(product: CatalogProduct, amount: NonZeroU32) -> Self {
        Self { product, amount }
    }

    /// Product identifier of this line.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// The catalog product this line refers to.
    pub fn product(&self) -> &CatalogProduct {
        &self.product
    }

    /// Purchased quantity, always at least one.
    pub fn amount(&self) -> NonZeroU32 {
        self.amount
    }

    pub(crate) fn set_amount(&mut self, amount: NonZeroU32) {
        self.amount = amount;
    }
}
