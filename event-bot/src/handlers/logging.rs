//! Logs each update in before() and the final response in after(); always continues.

use async_trait::async_trait;
use eventbot_core::{Handler, HandlerResponse, Result, Update, UpdateKind};
use tracing::{debug, info, instrument};

pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, update))]
    async fn before(&self, update: &Update) -> Result<bool> {
        match &update.kind {
            UpdateKind::Message(message) => info!(
                user_id = message.user.id,
                chat_id = message.chat.id,
                username = %message.user.username.as_deref().unwrap_or("unknown"),
                message_content = %message.content,
                "Received message"
            ),
            UpdateKind::CallbackQuery(query) => info!(
                user_id = query.user.id,
                callback_data = %query.data.as_deref().unwrap_or(""),
                "Callback received"
            ),
            UpdateKind::Other => debug!(update_id = update.id, "Ignoring update"),
        }
        Ok(true)
    }

    #[instrument(skip(self, update, response))]
    async fn after(&self, update: &Update, response: &HandlerResponse) -> Result<()> {
        debug!(
            update_id = update.id,
            response = ?response,
            "Processed update"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use eventbot_core::{Chat, Message, User};

    fn sample_update(content: &str) -> Update {
        Update {
            id: 1,
            kind: UpdateKind::Message(Message {
                id: "msg-1".to_string(),
                user: User::with_id(1),
                chat: Chat::private(1),
                content: content.to_string(),
                created_at: Utc::now(),
            }),
        }
    }

    #[tokio::test]
    async fn test_logging_handler_before_continues() {
        let h = LoggingHandler;
        assert!(h.before(&sample_update("hello")).await.unwrap());
        assert!(h
            .before(&Update { id: 2, kind: UpdateKind::Other })
            .await
            .unwrap());
    }

    #[tokio::test]
    async fn test_logging_handler_after_ok() {
        let h = LoggingHandler;
        let response = HandlerResponse::Reply("hi".to_string());
        assert!(h.after(&sample_update("hello"), &response).await.is_ok());
    }
}
