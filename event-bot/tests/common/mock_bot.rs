//! Mock implementation of [`eventbot_core::Bot`] for integration tests.
//!
//! Records every outgoing call so tests can assert on the reply text without hitting Telegram.

use async_trait::async_trait;
use eventbot_core::{Bot, Chat, InlineButton, Result};
use std::sync::{Arc, Mutex};

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    WithButtons { chat_id: i64, text: String, buttons: Vec<InlineButton> },
    CallbackAnswer { callback_id: String },
}

#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts of plain messages, in send order.
    pub fn texts(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn last_text(&self) -> Option<String> {
        self.texts().pop()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_with_buttons(&self, chat: &Chat, text: &str, buttons: &[InlineButton]) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::WithButtons {
            chat_id: chat.id,
            text: text.to_string(),
            buttons: buttons.to_vec(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.sent.lock().unwrap().push(Sent::CallbackAnswer {
            callback_id: callback_id.to_string(),
        });
        Ok(())
    }
}
