use std::io;

use crate::{cli::context::Session, cli::render, config::AppConfig};

pub(crate) fn run(config: &AppConfig) -> Result<(), String> {
    let session = Session::open(config)?;

    let order = session
        .checkout
        .last_order()
        .map_err(|error| format!("failed to read last order: {error}"))?
        .ok_or_else(|| "no order has been placed yet".to_string())?;

    render::order(&mut io::stdout().lock(), &order)
        .map_err(|error| format!("failed to write output: {error}"))
}
