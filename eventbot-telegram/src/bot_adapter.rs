//! Wraps teloxide::Bot and implements [`eventbot_core::Bot`] and [`eventbot_core::UpdateSource`].
//! Production code talks to Telegram through it; tests substitute other impls.

use async_trait::async_trait;
use eventbot_core::{Bot as CoreBot, Chat, EventbotError, InlineButton, Result, Update, UpdateSource};
use teloxide::payloads::{GetUpdatesSetters, SendMessageSetters};
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardButton, InlineKeyboardMarkup};
use tracing::debug;

use crate::adapters::TelegramUpdateWrapper;
use crate::chunks::{split_message, TELEGRAM_MAX_MESSAGE_CHARS};

fn transport_error(e: impl std::fmt::Display) -> EventbotError {
    EventbotError::Transport(e.to_string())
}

/// Thin wrapper around teloxide::Bot.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Calls `getMe`; returns the bot's display name. Used at startup to verify the token.
    pub async fn bot_name(&self) -> Result<String> {
        let me = self.bot.get_me().await.map_err(transport_error)?;
        Ok(me.user.first_name.clone())
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        for chunk in split_message(text, TELEGRAM_MAX_MESSAGE_CHARS) {
            self.bot
                .send_message(ChatId(chat.id), chunk)
                .await
                .map_err(transport_error)?;
        }
        Ok(())
    }

    async fn send_with_buttons(&self, chat: &Chat, text: &str, buttons: &[InlineButton]) -> Result<()> {
        let row: Vec<InlineKeyboardButton> = buttons
            .iter()
            .map(|b| InlineKeyboardButton::callback(b.text.clone(), b.callback_data.clone()))
            .collect();
        let keyboard = InlineKeyboardMarkup::new(vec![row]);

        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .reply_markup(keyboard)
            .await
            .map_err(transport_error)?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(transport_error)?;
        Ok(())
    }
}

#[async_trait]
impl UpdateSource for TelegramBotAdapter {
    async fn get_updates(&self, offset: i64) -> Result<Vec<Update>> {
        let offset = i32::try_from(offset).map_err(transport_error)?;
        let updates = self
            .bot
            .get_updates()
            .offset(offset)
            .await
            .map_err(transport_error)?;

        debug!(offset, count = updates.len(), "Fetched updates");
        Ok(updates
            .iter()
            .map(|u| TelegramUpdateWrapper(u).to_core())
            .collect())
    }
}
