//! Cart state manager.

use std::{num::NonZeroU32, sync::Arc};

use tracing::{error, info, instrument, warn};

use crate::{
    cart::CartLineItem,
    catalog::{CatalogClient, CatalogError},
    notices::{Notice, Notifier},
    pricing::{CartSummary, PricingError},
    products::ProductId,
    storage::{self, CART_KEY, Store, StoreError},
};

/// Owns the cart line items and keeps the persisted copy in sync.
///
/// Mutating operations never fail to the caller: a rejected operation emits
/// a [`Notice`] through the injected [`Notifier`] and leaves both the
/// in-memory and the persisted cart exactly as they were. A successful
/// mutation is written to the store before it becomes visible in memory.
pub struct CartManager {
    items: Vec<CartLineItem>,
    catalog: Arc<dyn CatalogClient>,
    store: Arc<dyn Store>,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for CartManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartManager")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl CartManager {
    /// Build a manager, restoring any cart previously saved in `store`.
    ///
    /// A missing, unreadable or corrupt saved cart yields an empty cart.
    pub fn load(
        catalog: Arc<dyn CatalogClient>,
        store: Arc<dyn Store>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let items = match storage::load_json::<Vec<CartLineItem>>(store.as_ref(), CART_KEY) {
            Ok(items) => items.unwrap_or_default(),
            Err(error) => {
                warn!(%error, "discarding unreadable saved cart");
                Vec::new()
            }
        };

        Self {
            items: dedup_by_product(items),
            catalog,
            store,
            notifier,
        }
    }

    /// Line items in display order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total units across every line.
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.amount().get()))
            .sum()
    }

    /// The line item for `product`, if present.
    pub fn find(&self, product: ProductId) -> Option<&CartLineItem> {
        self.items.iter().find(|item| item.id() == product)
    }

    /// Price the current cart.
    ///
    /// # Errors
    ///
    /// Returns a `PricingError` if a line cannot be priced.
    pub fn summary(&self) -> Result<CartSummary, PricingError> {
        CartSummary::from_items(&self.items)
    }

    /// Add one unit of `product`, fetching its details when it is new to the cart.
    #[instrument(skip(self))]
    pub async fn add_product(&mut self, product: ProductId) {
        if let Err(notice) = self.try_add_product(product).await {
            self.notifier.notify(&notice);
        }
    }

    /// Set the quantity of a line item. Zero or less removes it.
    #[instrument(skip(self))]
    pub async fn update_product_amount(&mut self, product: ProductId, amount: i64) {
        if amount <= 0 {
            self.remove_product(product);
            return;
        }

        if let Err(notice) = self.try_update_product_amount(product, amount).await {
            self.notifier.notify(&notice);
        }
    }

    /// Drop the line item for `product`.
    pub fn remove_product(&mut self, product: ProductId) {
        if let Err(notice) = self.try_remove_product(product) {
            self.notifier.notify(&notice);
        }
    }

    /// Empty the cart, both in memory and in the store.
    ///
    /// A failure to clear the saved cart is logged; memory is emptied anyway.
    pub fn reset_cart(&mut self) {
        if let Err(error) = self.store.remove(CART_KEY) {
            error!(%error, "failed to clear saved cart");
        }

        self.items.clear();

        info!("cart reset");
    }

    /// Empty the cart, failing if the saved cart cannot be cleared.
    ///
    /// On failure both the in-memory and the saved cart are left as they were.
    ///
    /// # Errors
    ///
    /// Returns the store error raised while removing the saved cart.
    pub fn try_reset_cart(&mut self) -> Result<(), StoreError> {
        self.store.remove(CART_KEY)?;

        self.items.clear();

        info!("cart reset");

        Ok(())
    }

    async fn try_add_product(&mut self, product: ProductId) -> Result<(), Notice> {
        let failed = || Notice::AdditionFailed { product };

        let current = self.find(product).map(CartLineItem::amount);

        let stock = self
            .catalog
            .get_stock(product)
            .await
            .map_err(catalog_failure("stock lookup", failed))?;

        let desired = current.map_or(NonZeroU32::MIN, |amount| amount.saturating_add(1));

        if desired.get() > stock.amount {
            return Err(Notice::OutOfStock { product });
        }

        let mut items = self.items.clone();

        if let Some(item) = items.iter_mut().find(|item| item.id() == product) {
            item.set_amount(desired);
        } else {
            let details = self
                .catalog
                .get_product(product)
                .await
                .map_err(catalog_failure("product lookup", failed))?;

            items.push(CartLineItem::new(details));
        }

        self.commit(items).map_err(store_failure(failed))
    }

    async fn try_update_product_amount(
        &mut self,
        product: ProductId,
        amount: i64,
    ) -> Result<(), Notice> {
        let failed = || Notice::UpdateFailed { product };

        let stock = self
            .catalog
            .get_stock(product)
            .await
            .map_err(catalog_failure("stock lookup", failed))?;

        let desired = u32::try_from(amount)
            .ok()
            .and_then(NonZeroU32::new)
            .filter(|desired| desired.get() <= stock.amount)
            .ok_or(Notice::OutOfStock { product })?;

        let mut items = self.items.clone();

        let item = items
            .iter_mut()
            .find(|item| item.id() == product)
            .ok_or_else(failed)?;

        item.set_amount(desired);

        self.commit(items).map_err(store_failure(failed))
    }

    fn try_remove_product(&mut self, product: ProductId) -> Result<(), Notice> {
        let failed = || Notice::RemovalFailed { product };

        if self.find(product).is_none() {
            return Err(failed());
        }

        let items = self
            .items
            .iter()
            .filter(|item| item.id() != product)
            .cloned()
            .collect();

        self.commit(items).map_err(store_failure(failed))
    }

    fn commit(&mut self, items: Vec<CartLineItem>) -> Result<(), StoreError> {
        storage::save_json(self.store.as_ref(), CART_KEY, &items)?;

        self.items = items;

        info!(
            lines = self.items.len(),
            units = self.item_count(),
            "cart saved"
        );

        Ok(())
    }
}

fn catalog_failure(
    what: &'static str,
    notice: impl FnOnce() -> Notice,
) -> impl FnOnce(CatalogError) -> Notice {
    move |error| {
        warn!(%error, "{what} failed");
        notice()
    }
}

fn store_failure(notice: impl FnOnce() -> Notice) -> impl FnOnce(StoreError) -> Notice {
    move |error| {
        error!(%error, "failed to save cart");
        notice()
    }
}

/// Keep the first line for each product; a hand-edited store could hold duplicates.
fn dedup_by_product(items: Vec<CartLineItem>) -> Vec<CartLineItem> {
    let mut unique: Vec<CartLineItem> = Vec::with_capacity(items.len());

    for item in items {
        if unique.iter().all(|kept| kept.id() != item.id()) {
            unique.push(item);
        }
    }

    unique
}
