//! HTTP catalog client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::products::{CatalogProduct, ProductId, Stock};

use super::{CatalogClient, CatalogError};

/// Configuration for connecting to the catalog service.
#[derive(Debug, Clone)]
pub struct HttpCatalogConfig {
    /// Base URL of the service, e.g. `"http://localhost:3333"`.
    pub base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,
}

/// Catalog client speaking JSON over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    base_url: String,
    http: Client,
}

impl HttpCatalogClient {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(config: HttpCatalogConfig) -> Result<Self, CatalogError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
        let url = format!("{}/{path}", self.base_url);

        debug!(%url, "catalog request");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(path.to_string()));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();

            return Err(CatalogError::UnexpectedStatus { status, body });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn get_stock(&self, product: ProductId) -> Result<Stock, CatalogError> {
        self.get_json(&format!("stock/{product}")).await
    }

    async fn get_product(&self, product: ProductId) -> Result<CatalogProduct, CatalogError> {
        self.get_json(&format!("products/{product}")).await
    }

    async fn list_products(&self) -> Result<Vec<CatalogProduct>, CatalogError> {
        self.get_json("products").await
    }
}
