//! Transport abstractions: [`Bot`] sends replies, [`UpdateSource`] fetches inbound updates.
//!
//! Both are transport-agnostic; `eventbot-telegram` implements them via teloxide and tests
//! substitute recording mocks.

use crate::error::Result;
use crate::types::{Chat, InlineButton, Message, Update};
use async_trait::async_trait;

/// Outgoing side of the transport.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;

    /// Sends a text message with one row of inline buttons.
    async fn send_with_buttons(&self, chat: &Chat, text: &str, buttons: &[InlineButton]) -> Result<()>;

    /// Acknowledges a button press so the client clears its pending indicator.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;

    /// Sends a reply into the chat the message came from.
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.send_message(&message.chat, text).await
    }
}

/// Inbound side of the transport: long-polling style batch fetch.
#[async_trait]
pub trait UpdateSource: Send + Sync {
    /// Returns updates whose id is `>= offset`, in arrival order.
    async fn get_updates(&self, offset: i64) -> Result<Vec<Update>>;
}
