//! [`EventCatalog`]: the seam the command dispatcher uses to read events.

use async_trait::async_trait;

use crate::error::CatalogError;
use crate::models::Event;
use crate::query::SearchQuery;

/// Read-only access to the external events catalog.
#[async_trait]
pub trait EventCatalog: Send + Sync {
    /// Looks up a single event by id.
    async fn get_event(&self, event_id: i64) -> Result<Event, CatalogError>;

    /// Searches events with the given filters.
    async fn search_events(&self, query: &SearchQuery) -> Result<Vec<Event>, CatalogError>;
}
