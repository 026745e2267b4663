//! Error types for the bot core.
//!
//! [`EventbotError`] is what handlers and transports return; each variant carries the rendered
//! cause from the crate that failed (storage, catalog, transport).

use thiserror::Error;

/// Top-level error for one unit of work (an update) or one transport call.
#[derive(Error, Debug)]
pub enum EventbotError {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Result type for core operations; uses [`EventbotError`].
pub type Result<T> = std::result::Result<T, EventbotError>;
