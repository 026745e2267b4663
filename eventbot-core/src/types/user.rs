//! User identity type for core messages.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// A user known only by id.
    pub fn with_id(id: i64) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}
