use std::io::{self, Write};

use clap::{Args, Subcommand};
use coffee_cart::products::ProductId;

use crate::{
    cli::{context::Session, render},
    config::AppConfig,
};

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Show the cart and its totals
    Show,
    /// Add one unit of a product
    Add {
        /// Product identifier
        product: u64,
    },
    /// Set the quantity of a product already in the cart (zero or less removes it)
    Update {
        /// Product identifier
        product: u64,

        /// New quantity
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Add one more unit of a product already in the cart
    Increment {
        /// Product identifier
        product: u64,
    },
    /// Take one unit of a product away (the last unit removes it)
    Decrement {
        /// Product identifier
        product: u64,
    },
    /// Remove a product from the cart
    Remove {
        /// Product identifier
        product: u64,
    },
    /// Empty the cart
    Reset,
}

pub(crate) async fn run(config: &AppConfig, command: CartCommand) -> Result<(), String> {
    let mut session = Session::open(config)?;

    apply(&mut session, command.command).await;

    let mut out = io::stdout().lock();

    render::notices(&mut io::stderr().lock(), &session.notices.drain())
        .and_then(|()| render::cart(&mut out, &session.cart))
        .and_then(|()| out.flush())
        .map_err(|error| format!("failed to write output: {error}"))
}

async fn apply(session: &mut Session, command: CartSubcommand) {
    match command {
        CartSubcommand::Show => {}
        CartSubcommand::Add { product } => session.cart.add_product(ProductId::new(product)).await,
        CartSubcommand::Update { product, amount } => {
            session
                .cart
                .update_product_amount(ProductId::new(product), amount)
                .await;
        }
        CartSubcommand::Increment { product } => step(session, ProductId::new(product), 1).await,
        CartSubcommand::Decrement { product } => step(session, ProductId::new(product), -1).await,
        CartSubcommand::Remove { product } => session.cart.remove_product(ProductId::new(product)),
        CartSubcommand::Reset => session.cart.reset_cart(),
    }
}

/// Move the quantity of `product` by `delta` from its current amount.
async fn step(session: &mut Session, product: ProductId, delta: i64) {
    let current = session
        .cart
        .find(product)
        .map_or(0, |item| i64::from(item.amount().get()));

    session
        .cart
        .update_product_amount(product, current.saturating_add(delta))
        .await;
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use coffee_cart::{
        catalog::MockCatalogClient,
        notices::Notice,
        products::{CatalogProduct, Stock},
        storage::MemoryStore,
    };
    use rust_decimal::Decimal;

    use super::*;

    fn session(catalog: MockCatalogClient) -> Session {
        Session::with(Arc::new(catalog), Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn add_then_negative_update_empties_cart() {
        let mut catalog = MockCatalogClient::new();

        catalog.expect_get_stock().once().returning(|id| {
            Ok(Stock {
                id,
                amount: 2,
            })
        });
        catalog.expect_get_product().once().returning(|id| {
            Ok(CatalogProduct {
                id,
                name: "Mocaccino".to_string(),
                description: "Café expresso com calda de chocolate".to_string(),
                price: Decimal::new(990, 2),
                image: None,
                tags: Vec::new(),
            })
        });

        let mut session = session(catalog);

        apply(&mut session, CartSubcommand::Add { product: 5 }).await;
        assert_eq!(session.cart.item_count(), 1);

        apply(
            &mut session,
            CartSubcommand::Update {
                product: 5,
                amount: -1,
            },
        )
        .await;

        assert!(session.cart.is_empty());
        assert!(session.notices.drain().is_empty());
    }

    #[tokio::test]
    async fn removing_unknown_product_leaves_a_notice() {
        let mut session = session(MockCatalogClient::new());

        apply(&mut session, CartSubcommand::Remove { product: 9 }).await;

        assert_eq!(
            session.notices.drain(),
            vec![Notice::RemovalFailed {
                product: ProductId::new(9)
            }]
        );
    }

    fn mocaccino(id: ProductId) -> CatalogProduct {
        CatalogProduct {
            id,
            name: "Mocaccino".to_string(),
            description: String::new(),
            price: Decimal::new(990, 2),
            image: None,
            tags: Vec::new(),
        }
    }

    #[tokio::test]
    async fn increment_and_decrement_step_by_one() {
        let mut catalog = MockCatalogClient::new();

        catalog
            .expect_get_stock()
            .times(3)
            .returning(|id| Ok(Stock { id, amount: 5 }));
        catalog
            .expect_get_product()
            .once()
            .returning(|id| Ok(mocaccino(id)));

        let mut session = session(catalog);

        apply(&mut session, CartSubcommand::Add { product: 5 }).await;
        apply(&mut session, CartSubcommand::Increment { product: 5 }).await;
        apply(&mut session, CartSubcommand::Increment { product: 5 }).await;
        assert_eq!(session.cart.item_count(), 3);

        apply(&mut session, CartSubcommand::Decrement { product: 5 }).await;
        assert_eq!(session.cart.item_count(), 2);
        assert!(session.notices.drain().is_empty());
    }

    #[tokio::test]
    async fn decrement_of_last_unit_removes_line() {
        let mut catalog = MockCatalogClient::new();

        catalog
            .expect_get_stock()
            .once()
            .returning(|id| Ok(Stock { id, amount: 5 }));
        catalog
            .expect_get_product()
            .once()
            .returning(|id| Ok(mocaccino(id)));

        let mut session = session(catalog);

        apply(&mut session, CartSubcommand::Add { product: 5 }).await;
        apply(&mut session, CartSubcommand::Decrement { product: 5 }).await;

        assert!(session.cart.is_empty());
        assert!(session.notices.drain().is_empty());
    }

    #[tokio::test]
    async fn increment_of_missing_product_reports_update_failed() {
        let mut catalog = MockCatalogClient::new();

        catalog
            .expect_get_stock()
            .once()
            .returning(|id| Ok(Stock { id, amount: 5 }));
        catalog.expect_get_product().never();

        let mut session = session(catalog);

        apply(&mut session, CartSubcommand::Increment { product: 7 }).await;

        assert_eq!(
            session.notices.drain(),
            vec![Notice::UpdateFailed {
                product: ProductId::new(7)
            }]
        );
    }
}
