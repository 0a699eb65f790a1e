use clap::{Parser, Subcommand};

use crate::config::AppConfig;

mod cart;
mod checkout;
mod context;
mod order;
mod products;
mod render;

#[derive(Debug, Parser)]
#[command(name = "coffee-cart", about = "Coffee delivery cart", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    pub config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the coffees on sale
    Products,
    /// Inspect or change the cart
    Cart(cart::CartCommand),
    /// Place an order with the current cart
    Checkout(checkout::CheckoutArgs),
    /// Show the last placed order
    Order,
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Products => products::run(&self.config).await,
            Commands::Cart(command) => cart::run(&self.config, command).await,
            Commands::Checkout(args) => checkout::run(&self.config, args),
            Commands::Order => order::run(&self.config),
        }
    }
}
