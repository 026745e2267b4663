//! [`TimepadClient`]: reqwest-based implementation of [`EventCatalog`].

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

use crate::catalog::EventCatalog;
use crate::error::CatalogError;
use crate::mask_token;
use crate::models::{lowercase_keys, Event, EventsResponse};
use crate::query::SearchQuery;

pub const TIMEPAD_API_BASE: &str = "https://api.timepad.ru/v1";

/// TimePad API client. Immutable after construction; the bearer token is attached per request.
#[derive(Debug, Clone)]
pub struct TimepadClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl TimepadClient {
    /// Creates a client for the public TimePad API.
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: TIMEPAD_API_BASE.to_string(),
        }
    }

    /// Points the client at another base URL (mock servers, proxies). Trailing slashes are ignored.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One authenticated GET; non-success statuses and undecodable bodies are errors.
    /// Property names are matched case-insensitively.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, CatalogError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, api_key = %mask_token(&self.api_key), "TimePad request");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)?;
        Ok(serde_json::from_value(lowercase_keys(value))?)
    }
}

#[async_trait]
impl EventCatalog for TimepadClient {
    #[instrument(skip(self))]
    async fn get_event(&self, event_id: i64) -> Result<Event, CatalogError> {
        let event: Event = self.get_json(&format!("/events/{}", event_id), &[]).await?;
        debug!(event_id, "Fetched event");
        Ok(event.cleaned())
    }

    #[instrument(skip(self))]
    async fn search_events(&self, query: &SearchQuery) -> Result<Vec<Event>, CatalogError> {
        let pairs = query.to_query_pairs_now();
        let response: EventsResponse = self.get_json("/events", &pairs).await?;
        let events: Vec<Event> = response.values.into_iter().map(Event::cleaned).collect();
        info!(count = events.len(), text = ?query.text, category = ?query.category_id, "Searched events");
        Ok(events)
    }
}
