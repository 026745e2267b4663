//! Which of the two per-user lists an operation targets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the two per-user event collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Visited,
    Wishlist,
}

impl ListKind {
    /// Table holding the `(user_id, event_id)` pairs of this list.
    pub fn table(self) -> &'static str {
        match self {
            ListKind::Visited => "visited_events",
            ListKind::Wishlist => "wishlist_events",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ListKind::Visited => "visited",
            ListKind::Wishlist => "wishlist",
        }
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`ListKind::from_str`] for anything other than `visited` / `wishlist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownListKind(pub String);

impl fmt::Display for UnknownListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown list name: {}", self.0)
    }
}

impl std::error::Error for UnknownListKind {}

impl FromStr for ListKind {
    type Err = UnknownListKind;

    /// Case-insensitive; exactly two names are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("visited") {
            Ok(ListKind::Visited)
        } else if s.eq_ignore_ascii_case("wishlist") {
            Ok(ListKind::Wishlist)
        } else {
            Err(UnknownListKind(s.to_string()))
        }
    }
}
