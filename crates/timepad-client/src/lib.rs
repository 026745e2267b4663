//! # TimePad client
//!
//! Stateless HTTP client for the TimePad events API (`https://api.timepad.ru/v1`).
//!
//! - [`TimepadClient::get_event`] – `GET /events/{id}`
//! - [`TimepadClient::search_events`] – `GET /events` with the filters of a [`SearchQuery`]
//!
//! The API key is attached to each request as a bearer token; the client itself is immutable
//! and can be shared freely. Event names are cleaned with [`strip_entities`] before they are
//! returned.
//!
//! ## Example
//!
//! ```rust,no_run
//! use timepad_client::{EventCatalog, SearchQuery, TimepadClient};
//!
//! async fn example() -> Result<(), timepad_client::CatalogError> {
//!     let client = TimepadClient::new("api-key".to_string());
//!     let events = client.search_events(&SearchQuery::new().text("jazz")).await?;
//!     for event in events {
//!         println!("{} {}", event.id, event.name);
//!     }
//!     Ok(())
//! }
//! ```

mod catalog;
mod client;
mod error;
mod models;
mod query;

pub use catalog::EventCatalog;
pub use client::{TimepadClient, TIMEPAD_API_BASE};
pub use error::CatalogError;
pub use models::{strip_entities, Event, EventLocation};
pub use query::{SearchQuery, DEFAULT_CITY, TIMESTAMP_FORMAT};

/// Masks an API key for logs: first 7 chars + `***` + last 4 chars; keys of length ≤ 11 become `***`.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}
