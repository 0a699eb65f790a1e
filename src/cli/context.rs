//! Per-invocation session wiring.

use std::sync::Arc;

use coffee_cart::{
    cart::CartManager,
    catalog::{CatalogClient, HttpCatalogClient},
    checkout::Checkout,
    notices::NoticeLog,
    storage::{FileStore, Store},
};

use crate::config::AppConfig;

pub(crate) struct Session {
    pub catalog: Arc<dyn CatalogClient>,
    pub cart: CartManager,
    pub checkout: Checkout,
    pub notices: Arc<NoticeLog>,
}

impl Session {
    pub(crate) fn open(config: &AppConfig) -> Result<Self, String> {
        let catalog: Arc<dyn CatalogClient> = Arc::new(
            HttpCatalogClient::new((&config.catalog).into())
                .map_err(|error| format!("failed to build catalog client: {error}"))?,
        );
        let store: Arc<dyn Store> = Arc::new(FileStore::new(&config.storage.store_dir));

        Ok(Self::with(catalog, store))
    }

    pub(crate) fn with(catalog: Arc<dyn CatalogClient>, store: Arc<dyn Store>) -> Self {
        let notices = Arc::new(NoticeLog::new());

        Self {
            cart: CartManager::load(catalog.clone(), store.clone(), notices.clone()),
            checkout: Checkout::new(store),
            catalog,
            notices,
        }
    }
}
