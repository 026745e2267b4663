//! Event records as returned by the TimePad API.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One catalog event. Only the id is ever persisted locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "description_short")]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub location: Option<EventLocation>,
    #[serde(default, deserialize_with = "deserialize_starts_at")]
    pub starts_at: Option<DateTime<FixedOffset>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLocation {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

/// Body of `GET /events`.
#[derive(Debug, Deserialize)]
pub(crate) struct EventsResponse {
    #[serde(default)]
    pub values: Vec<Event>,
}

impl Event {
    /// Applies [`strip_entities`] to the display name.
    pub(crate) fn cleaned(mut self) -> Self {
        self.name = strip_entities(&self.name);
        self
    }
}

/// Removes the literal substrings `&quot;`, `&amp;` and `quot;`, in that order.
///
/// Not an HTML decoder: other entities are left untouched.
pub fn strip_entities(name: &str) -> String {
    name.replace("&quot;", "")
        .replace("&amp;", "")
        .replace("quot;", "")
}

/// Lowercases every object key, recursively, so that `Id`, `ID` and `id` all decode into `id`.
pub(crate) fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), lowercase_keys(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(lowercase_keys).collect()),
        other => other,
    }
}

/// TimePad sends `2024-05-01T19:00:00+0300`; RFC 3339 (`+03:00`) is accepted too.
/// Anything unparseable becomes `None` rather than failing the whole event.
fn deserialize_starts_at<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_timestamp))
}

fn parse_timestamp(s: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_entities_removes_exactly_three_substrings() {
        assert_eq!(strip_entities("&quot;Title&quot;"), "Title");
        assert_eq!(strip_entities("Rock &amp; Roll"), "Rock  Roll");
        assert_eq!(strip_entities("quot;Jazz"), "Jazz");
        assert_eq!(strip_entities("a &lt; b &#39;c&#39;"), "a &lt; b &#39;c&#39;");
        assert_eq!(strip_entities("plain"), "plain");
    }

    #[test]
    fn test_event_decodes_timepad_shape() {
        let json = r#"{
            "id": 2768155,
            "name": "&quot;Rust Meetup&quot;",
            "description_short": "Talks",
            "url": "https://afisha.timepad.ru/event/2768155",
            "location": {"country": "Россия", "city": "Москва", "address": "ул. Льва Толстого, 16"},
            "starts_at": "2024-05-01T19:00:00+0300",
            "categories": [{"id": 452, "name": "ИТ и интернет"}]
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        let event = event.cleaned();

        assert_eq!(event.id, 2768155);
        assert_eq!(event.name, "Rust Meetup");
        assert_eq!(event.description, "Talks");
        assert_eq!(event.location.unwrap().city.as_deref(), Some("Москва"));
        let starts_at = event.starts_at.expect("starts_at parsed");
        assert_eq!(starts_at.offset().local_minus_utc(), 3 * 3600);
    }

    #[test]
    fn test_event_optional_fields_default() {
        let event: Event = serde_json::from_str(r#"{"id": 1, "starts_at": "soon"}"#).unwrap();
        assert_eq!(event.name, "");
        assert_eq!(event.description, "");
        assert!(event.location.is_none());
        assert!(event.starts_at.is_none());
    }

    #[test]
    fn test_events_response_without_values_is_empty() {
        let response: EventsResponse = serde_json::from_str(r#"{"total": 0}"#).unwrap();
        assert!(response.values.is_empty());
    }

    #[test]
    fn test_lowercase_keys_is_recursive() {
        let value = serde_json::json!({"Values": [{"Id": 7, "Name": "X", "Location": {"City": "Москва"}}]});
        let response: EventsResponse = serde_json::from_value(lowercase_keys(value)).unwrap();
        assert_eq!(response.values.len(), 1);
        assert_eq!(response.values[0].id, 7);
        assert_eq!(response.values[0].name, "X");
        assert_eq!(
            response.values[0].location.as_ref().and_then(|l| l.city.as_deref()),
            Some("Москва")
        );
    }

    #[test]
    fn test_lowercase_keys_leaves_values_alone() {
        let value = lowercase_keys(serde_json::json!({"NAME": "Rust MEETUP"}));
        assert_eq!(value, serde_json::json!({"name": "Rust MEETUP"}));
    }
}
