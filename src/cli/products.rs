use std::io;

use crate::{cli::context::Session, cli::render, config::AppConfig};

pub(crate) async fn run(config: &AppConfig) -> Result<(), String> {
    let session = Session::open(config)?;

    let products = session
        .catalog
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    render::products(&mut io::stdout().lock(), &products)
        .map_err(|error| format!("failed to write output: {error}"))
}
