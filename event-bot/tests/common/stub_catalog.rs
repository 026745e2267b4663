//! In-memory [`timepad_client::EventCatalog`] with recorded search queries.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use timepad_client::{CatalogError, Event, EventCatalog, SearchQuery};

pub fn event(id: i64, name: &str) -> Event {
    Event {
        id,
        name: name.to_string(),
        description: String::new(),
        url: format!("https://afisha.timepad.ru/event/{}", id),
        location: None,
        starts_at: None,
    }
}

#[derive(Default)]
pub struct StubCatalog {
    events: HashMap<i64, Event>,
    search_results: Vec<Event>,
    fail_search: bool,
    queries: Mutex<Vec<SearchQuery>>,
}

impl StubCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Event resolvable through `get_event`; unknown ids return a 404 status error.
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.insert(event.id, event);
        self
    }

    pub fn with_search_results(mut self, events: Vec<Event>) -> Self {
        self.search_results = events;
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.fail_search = true;
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventCatalog for StubCatalog {
    async fn get_event(&self, event_id: i64) -> Result<Event, CatalogError> {
        self.events
            .get(&event_id)
            .cloned()
            .ok_or_else(|| CatalogError::Status {
                status: 404,
                body: "not found".to_string(),
            })
    }

    async fn search_events(&self, query: &SearchQuery) -> Result<Vec<Event>, CatalogError> {
        self.queries.lock().unwrap().push(query.clone());
        if self.fail_search {
            return Err(CatalogError::Status {
                status: 503,
                body: "unavailable".to_string(),
            });
        }
        Ok(self.search_results.clone())
    }
}
