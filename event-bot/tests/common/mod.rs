//! Shared fixtures for event-bot integration tests.

#![allow(dead_code)]

pub mod mock_bot;
pub mod stub_catalog;

use chrono::Utc;
use eventbot_core::{CallbackQuery, Chat, Message, Update, UpdateKind, User};

pub const USER_ID: i64 = 5001;

/// Text message from [`USER_ID`] in their private chat.
pub fn text_update(id: i64, text: &str) -> Update {
    Update {
        id,
        kind: UpdateKind::Message(Message {
            id: format!("msg-{}", id),
            user: User::with_id(USER_ID),
            chat: Chat::private(USER_ID),
            content: text.to_string(),
            created_at: Utc::now(),
        }),
    }
}

pub fn callback_update(id: i64, callback_id: &str, data: &str) -> Update {
    Update {
        id,
        kind: UpdateKind::CallbackQuery(CallbackQuery {
            id: callback_id.to_string(),
            user: User::with_id(USER_ID),
            chat: Some(Chat::private(USER_ID)),
            data: Some(data.to_string()),
        }),
    }
}
