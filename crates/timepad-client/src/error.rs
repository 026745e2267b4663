//! Catalog error types.

use thiserror::Error;

/// Why a catalog call failed. Every call is attempted once; nothing here is retried.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("TimePad API error ({status}): {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
