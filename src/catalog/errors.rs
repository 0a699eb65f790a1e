//! Catalog client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An HTTP transport or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist.
    #[error("catalog resource not found: {0}")]
    NotFound(String),

    /// The service answered with a non-2xx status.
    #[error("unexpected response from catalog ({status}): {body}")]
    UnexpectedStatus {
        /// Response status.
        status: StatusCode,
        /// Response body, for diagnostics.
        body: String,
    },
}
