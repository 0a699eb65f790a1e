//! Catalog Config

use std::time::Duration;

use clap::Args;
use coffee_cart::catalog::HttpCatalogConfig;

/// Remote catalog connection settings.
#[derive(Debug, Args)]
pub(crate) struct CatalogConfig {
    /// Base URL of the product and stock service
    #[arg(long, env = "CATALOG_URL", default_value = "http://localhost:3333")]
    pub catalog_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CATALOG_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub catalog_timeout_seconds: u64,
}

impl From<&CatalogConfig> for HttpCatalogConfig {
    fn from(config: &CatalogConfig) -> Self {
        HttpCatalogConfig {
            base_url: config.catalog_url.clone(),
            timeout: Duration::from_secs(config.catalog_timeout_seconds),
        }
    }
}
