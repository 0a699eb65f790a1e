//! Remote Catalog
//!
//! Request/response access to the storefront's product and stock service.

use async_trait::async_trait;
use mockall::automock;

use crate::products::{CatalogProduct, ProductId, Stock};

pub mod errors;
mod http;

pub use errors::CatalogError;
pub use http::{HttpCatalogClient, HttpCatalogConfig};

/// Product and stock lookups.
#[automock]
#[async_trait]
pub trait CatalogClient: Send + Sync {
    /// Current stock for a product. Never cached.
    async fn get_stock(&self, product: ProductId) -> Result<Stock, CatalogError>;

    /// Full product details.
    async fn get_product(&self, product: ProductId) -> Result<CatalogProduct, CatalogError>;

    /// Every product on sale.
    async fn list_products(&self) -> Result<Vec<CatalogProduct>, CatalogError>;
}
