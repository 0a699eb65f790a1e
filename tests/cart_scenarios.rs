//! Cart behaviour against a mocked catalog and real stores.

use std::sync::Arc;

use coffee_cart::{catalog::MockCatalogClient, prelude::*, storage};
use rust_decimal::Decimal;
use testresult::TestResult;

fn espresso() -> CatalogProduct {
    CatalogProduct {
        id: ProductId::new(1),
        name: "Expresso Tradicional".to_string(),
        description: "O tradicional café feito com água quente e grãos moídos".to_string(),
        price: Decimal::new(990, 2),
        image: Some("/coffees/expresso.png".to_string()),
        tags: vec!["tradicional".to_string()],
    }
}

fn catalog_with_stock(amount: u32) -> MockCatalogClient {
    let mut catalog = MockCatalogClient::new();

    catalog
        .expect_get_stock()
        .returning(move |id| Ok(Stock { id, amount }));
    catalog.expect_get_product().returning(|_| Ok(espresso()));

    catalog
}

fn cart(catalog: MockCatalogClient, store: Arc<dyn Store>) -> (CartManager, Arc<NoticeLog>) {
    let notices = Arc::new(NoticeLog::new());
    let cart = CartManager::load(Arc::new(catalog), store, notices.clone());

    (cart, notices)
}

#[tokio::test]
async fn adding_first_unit_prices_cart_with_delivery() -> TestResult {
    let store = Arc::new(MemoryStore::new());
    let (mut cart, notices) = cart(catalog_with_stock(5), store.clone());

    cart.add_product(ProductId::new(1)).await;

    let summary = cart.summary()?;

    assert_eq!(cart.len(), 1);
    assert_eq!(summary.subtotal.to_minor_units(), 990);
    assert_eq!(summary.delivery_fee.to_minor_units(), 350);
    assert_eq!(summary.total.to_minor_units(), 1_340);
    assert!(notices.notices().is_empty(), "no notices expected");

    let saved: Vec<CartLineItem> =
        storage::load_json(store.as_ref(), CART_KEY)?.ok_or("cart not saved")?;

    assert_eq!(saved.as_slice(), cart.items());

    Ok(())
}

#[tokio::test]
async fn repeated_adds_stop_at_stock() {
    let (mut cart, notices) = cart(catalog_with_stock(3), Arc::new(MemoryStore::new()));

    for _ in 0..4 {
        cart.add_product(ProductId::new(1)).await;
    }

    assert_eq!(cart.item_count(), 3);
    assert_eq!(
        notices.notices(),
        vec![Notice::OutOfStock {
            product: ProductId::new(1)
        }]
    );
}

#[tokio::test]
async fn update_beyond_stock_keeps_amount() {
    let (mut cart, notices) = cart(catalog_with_stock(3), Arc::new(MemoryStore::new()));

    cart.add_product(ProductId::new(1)).await;
    cart.add_product(ProductId::new(1)).await;
    cart.update_product_amount(ProductId::new(1), 10).await;

    assert_eq!(
        cart.find(ProductId::new(1)).map(|item| item.amount().get()),
        Some(2)
    );
    assert_eq!(
        notices.drain(),
        vec![Notice::OutOfStock {
            product: ProductId::new(1)
        }]
    );
}

#[tokio::test]
async fn update_within_stock_sets_amount() {
    let (mut cart, notices) = cart(catalog_with_stock(5), Arc::new(MemoryStore::new()));

    cart.add_product(ProductId::new(1)).await;
    cart.update_product_amount(ProductId::new(1), 4).await;

    assert_eq!(cart.item_count(), 4);
    assert!(notices.notices().is_empty(), "no notices expected");
}

#[tokio::test]
async fn non_positive_update_removes_line() {
    for amount in [0, -1] {
        let (mut cart, notices) = cart(catalog_with_stock(5), Arc::new(MemoryStore::new()));

        cart.add_product(ProductId::new(1)).await;
        cart.update_product_amount(ProductId::new(1), amount).await;

        assert!(cart.is_empty(), "amount {amount} should remove the line");
        assert!(notices.notices().is_empty(), "no notices expected");
    }
}

#[tokio::test]
async fn non_positive_update_of_missing_line_reports_removal_failed() {
    let (mut cart, notices) = cart(catalog_with_stock(5), Arc::new(MemoryStore::new()));

    cart.update_product_amount(ProductId::new(9), 0).await;

    assert_eq!(
        notices.notices(),
        vec![Notice::RemovalFailed {
            product: ProductId::new(9)
        }]
    );
}

#[tokio::test]
async fn removing_missing_line_leaves_cart_untouched() {
    let (mut cart, notices) = cart(catalog_with_stock(5), Arc::new(MemoryStore::new()));

    cart.add_product(ProductId::new(1)).await;

    let before = cart.items().to_vec();

    cart.remove_product(ProductId::new(2));

    assert_eq!(cart.items(), before.as_slice());
    assert_eq!(
        notices.notices(),
        vec![Notice::RemovalFailed {
            product: ProductId::new(2)
        }]
    );
}

#[tokio::test]
async fn cart_survives_reload_from_file_store() -> TestResult {
    let dir = tempfile::tempdir()?;

    {
        let store = Arc::new(FileStore::new(dir.path()));
        let (mut cart, _) = cart(catalog_with_stock(5), store);

        cart.add_product(ProductId::new(1)).await;
        cart.add_product(ProductId::new(1)).await;
    }

    let store = Arc::new(FileStore::new(dir.path()));
    let (mut reloaded, _) = cart(MockCatalogClient::new(), store.clone());

    assert_eq!(reloaded.item_count(), 2);
    assert_eq!(
        reloaded.find(ProductId::new(1)).map(|item| item.product().name.clone()),
        Some("Expresso Tradicional".to_string())
    );

    reloaded.reset_cart();

    assert!(store.get(CART_KEY)?.is_none(), "saved cart should be gone");

    Ok(())
}
