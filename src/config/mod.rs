//! CLI configuration

use clap::Args;

pub(crate) mod catalog;
pub(crate) mod logging;
pub(crate) mod storage;

pub(crate) use catalog::CatalogConfig;
pub(crate) use logging::{LogFormat, LoggingConfig};
pub(crate) use storage::StorageConfig;

/// Settings shared by every command.
#[derive(Debug, Args)]
pub(crate) struct AppConfig {
    /// Remote catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Cart storage settings.
    #[command(flatten)]
    pub storage: StorageConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}
