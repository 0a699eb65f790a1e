//! Storage Config

use std::path::PathBuf;

use clap::Args;

/// Where the cart and the last order are kept between runs.
#[derive(Debug, Args)]
pub(crate) struct StorageConfig {
    /// Directory holding the saved cart and order
    #[arg(long, env = "CART_STORE_DIR", default_value = ".coffee-delivery")]
    pub store_dir: PathBuf,
}
