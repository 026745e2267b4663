//! Adapters from Telegram (teloxide) types to eventbot_core types.
//! Depends only on teloxide and eventbot_core type definitions.

use eventbot_core::{CallbackQuery, Chat, Message, Update, UpdateKind, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl TelegramUserWrapper<'_> {
    pub fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn chat_to_core(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: if chat.is_private() { "private" } else { "group" }.to_string(),
    }
}

/// Wraps a teloxide Update for conversion to core [`Update`].
///
/// Text messages become [`UpdateKind::Message`], button presses [`UpdateKind::CallbackQuery`];
/// everything else (including messages without text) is [`UpdateKind::Other`].
pub struct TelegramUpdateWrapper<'a>(pub &'a teloxide::types::Update);

impl TelegramUpdateWrapper<'_> {
    pub fn to_core(&self) -> Update {
        use teloxide::types::UpdateKind as TgKind;

        let kind = match &self.0.kind {
            TgKind::Message(msg) => match msg.text() {
                Some(text) => UpdateKind::Message(Message {
                    id: msg.id.to_string(),
                    user: msg
                        .from
                        .as_ref()
                        .map(|u| TelegramUserWrapper(u).to_core())
                        .unwrap_or_else(|| User::with_id(msg.chat.id.0)),
                    chat: chat_to_core(&msg.chat),
                    content: text.to_string(),
                    created_at: msg.date,
                }),
                None => UpdateKind::Other,
            },
            TgKind::CallbackQuery(q) => UpdateKind::CallbackQuery(CallbackQuery {
                id: q.id.0.clone(),
                user: TelegramUserWrapper(&q.from).to_core(),
                chat: q.message.as_ref().map(|m| chat_to_core(m.chat())),
                data: q.data.clone(),
            }),
            _ => UpdateKind::Other,
        };

        Update {
            id: self.0.id.0 as i64,
            kind,
        }
    }
}
