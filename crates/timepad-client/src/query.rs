//! Filters for `GET /events`.

use chrono::{Local, Months, NaiveDateTime};

/// City used when the caller does not pick one.
pub const DEFAULT_CITY: &str = "Москва";

/// Wire format of `starts_at_min` / `starts_at_max` (local time, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Search filters. Unset dates default to a window from "now" to "now + 1 month",
/// computed when the request is built.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub text: Option<String>,
    pub city: Option<String>,
    pub category_id: Option<i64>,
    pub date_from: Option<NaiveDateTime>,
    pub date_to: Option<NaiveDateTime>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: None,
            city: Some(DEFAULT_CITY.to_string()),
            category_id: None,
            date_from: None,
            date_to: None,
            min_price: None,
            max_price: None,
        }
    }
}

impl SearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text query (`q`).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// City filter; an empty string drops the filter entirely.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        let city = city.into();
        self.city = (!city.is_empty()).then_some(city);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn starts_between(mut self, from: NaiveDateTime, to: NaiveDateTime) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    pub fn price_between(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Query-string pairs, with date defaults computed relative to `now`.
    pub fn to_query_pairs(&self, now: NaiveDateTime) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("q", self.text.clone().unwrap_or_default())];

        if let Some(city) = self.city.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("cities", city.to_string()));
        }
        if let Some(category_id) = self.category_id {
            pairs.push(("category_ids[]", category_id.to_string()));
        }

        let from = self.date_from.unwrap_or(now);
        let to = self
            .date_to
            .unwrap_or_else(|| now.checked_add_months(Months::new(1)).unwrap_or(now));
        pairs.push(("starts_at_min", from.format(TIMESTAMP_FORMAT).to_string()));
        pairs.push(("starts_at_max", to.format(TIMESTAMP_FORMAT).to_string()));

        if let Some(min_price) = self.min_price {
            pairs.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            pairs.push(("max_price", max_price.to_string()));
        }

        pairs
    }

    /// [`Self::to_query_pairs`] relative to the current local time.
    pub fn to_query_pairs_now(&self) -> Vec<(&'static str, String)> {
        self.to_query_pairs(Local::now().naive_local())
    }
}
