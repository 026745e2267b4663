//! One inbound unit of work from the transport.

use serde::{Deserialize, Serialize};

use super::{callback::CallbackQuery, message::Message};

/// Update with its transport-assigned, monotonically increasing id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Update {
    pub id: i64,
    pub kind: UpdateKind,
}

/// What the update carries. `Other` covers everything the bot does not react to
/// (stickers, edits, non-text messages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum UpdateKind {
    Message(Message),
    CallbackQuery(CallbackQuery),
    Other,
}

impl Update {
    /// Id of the user who caused the update, when known.
    pub fn user_id(&self) -> Option<i64> {
        match &self.kind {
            UpdateKind::Message(m) => Some(m.user.id),
            UpdateKind::CallbackQuery(q) => Some(q.user.id),
            UpdateKind::Other => None,
        }
    }

    /// Short label for logs.
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            UpdateKind::Message(_) => "message",
            UpdateKind::CallbackQuery(_) => "callback_query",
            UpdateKind::Other => "other",
        }
    }
}
