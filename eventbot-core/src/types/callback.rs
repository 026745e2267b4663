//! Inline-button press.

use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A press on an inline button. `chat` is absent when the originating message is not available
/// (e.g. inline-mode messages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub user: User,
    pub chat: Option<Chat>,
    pub data: Option<String>,
}
