use std::io;

use clap::Args;
use coffee_cart::checkout::{CheckoutForm, PaymentMethod};

use crate::{
    cli::{context::Session, render},
    config::AppConfig,
};

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Postal code (CEP)
    #[arg(long, default_value = "")]
    zip_code: String,

    /// Street
    #[arg(long, default_value = "")]
    street: String,

    /// House number
    #[arg(long, default_value = "")]
    number: String,

    /// Complement (optional)
    #[arg(long)]
    complement: Option<String>,

    /// District
    #[arg(long, default_value = "")]
    district: String,

    /// City
    #[arg(long, default_value = "")]
    city: String,

    /// State code (UF)
    #[arg(long, default_value = "")]
    state: String,

    /// Payment method
    #[arg(long, value_enum)]
    payment_method: Option<PaymentMethod>,
}

impl From<CheckoutArgs> for CheckoutForm {
    fn from(args: CheckoutArgs) -> Self {
        CheckoutForm {
            postal_code: args.zip_code,
            street: args.street,
            number: args.number,
            complement: args.complement,
            district: args.district,
            city: args.city,
            state: args.state,
            payment_method: args.payment_method,
        }
    }
}

pub(crate) fn run(config: &AppConfig, args: CheckoutArgs) -> Result<(), String> {
    let mut session = Session::open(config)?;

    let order = session
        .checkout
        .submit(&mut session.cart, &args.into())
        .map_err(|error| format!("checkout failed: {error}"))?;

    render::order(&mut io::stdout().lock(), &order)
        .map_err(|error| format!("failed to write output: {error}"))
}
