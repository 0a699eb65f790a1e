//! Products

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw catalog identifier.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw catalog identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

/// Product as served by the catalog, without any cart quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    /// Product identifier
    pub id: ProductId,

    /// Display name
    pub name: String,

    /// Display description
    pub description: String,

    /// Unit price in BRL major units
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Image path or URL, when the catalog provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Catalog tags (e.g. "tradicional", "com leite")
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Stock level for a product at query time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    /// Product identifier
    pub id: ProductId,

    /// Maximum purchasable quantity
    pub amount: u32,
}
