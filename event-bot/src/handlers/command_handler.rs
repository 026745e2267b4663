//! Command dispatch: maps each text command to storage / catalog calls and replies through the [`Bot`].
//!
//! The chat id doubles as the user id for bookmarks. Malformed input gets a fixed reply; storage
//! and catalog failures abort the update with an error and no reply.

use std::sync::Arc;

use async_trait::async_trait;
use eventbot_core::{
    Bot, CallbackQuery, EventbotError, Handler, HandlerResponse, InlineButton, Message, Result,
    Update, UpdateKind,
};
use storage::{BookmarkStore, ListKind, StorageError};
use timepad_client::{CatalogError, Event, EventCatalog, SearchQuery};
use tracing::{info, instrument, warn};

use crate::commands::{
    command_list, list_added_reply, list_removed_reply, recommendations_reply, search_reply,
    unknown_command_reply, visited_reply, wishlist_reply, Command, MENU_BUTTON_TEXT,
    MENU_CALLBACK, MENU_PROMPT,
};

/// TimePad category "ИТ и интернет".
pub const RECOMMENDATIONS_CATEGORY_ID: i64 = 452;

fn storage_error(e: StorageError) -> EventbotError {
    EventbotError::Storage(e.to_string())
}

fn catalog_error(e: CatalogError) -> EventbotError {
    EventbotError::Catalog(e.to_string())
}

/// Handles text commands and menu callbacks; stops the chain for every update it answers.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    store: Arc<dyn BookmarkStore>,
    catalog: Arc<dyn EventCatalog>,
}

impl CommandHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        store: Arc<dyn BookmarkStore>,
        catalog: Arc<dyn EventCatalog>,
    ) -> Self {
        Self {
            bot,
            store,
            catalog,
        }
    }

    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn on_message(&self, message: &Message) -> Result<HandlerResponse> {
        let user_id = message.chat.id;

        let reply = match Command::parse(&message.content) {
            Command::Start => {
                let button = InlineButton::callback(MENU_BUTTON_TEXT, MENU_CALLBACK);
                self.bot
                    .send_with_buttons(&message.chat, MENU_PROMPT, &[button])
                    .await?;
                return Ok(HandlerResponse::Reply(MENU_PROMPT.to_string()));
            }
            Command::Search(text) => {
                let mut query = SearchQuery::new();
                if let Some(text) = text {
                    query = query.text(text);
                }
                let events = self.search(&query).await?;
                search_reply(&events)
            }
            Command::AddToList(args) => match args {
                Ok(args) => {
                    self.store.ensure_user(user_id).await.map_err(storage_error)?;
                    self.store
                        .add(args.list, user_id, args.event_id)
                        .await
                        .map_err(storage_error)?;
                    info!(user_id, event_id = args.event_id, list = %args.list, "Event added to list");
                    list_added_reply(args.list)
                }
                Err(e) => e.to_string(),
            },
            Command::RemoveFromList(args) => match args {
                Ok(args) => {
                    self.store
                        .remove(args.list, user_id, args.event_id)
                        .await
                        .map_err(storage_error)?;
                    info!(user_id, event_id = args.event_id, list = %args.list, "Event removed from list");
                    list_removed_reply(args.list)
                }
                Err(e) => e.to_string(),
            },
            Command::Recommendations => {
                let query = SearchQuery::new().category(RECOMMENDATIONS_CATEGORY_ID);
                let events = self.search(&query).await?;
                recommendations_reply(&events)
            }
            Command::GetWishlist => wishlist_reply(&self.resolve_list(ListKind::Wishlist, user_id).await?),
            Command::GetVisitedList => visited_reply(&self.resolve_list(ListKind::Visited, user_id).await?),
            Command::Unknown => unknown_command_reply(&message.content),
        };

        self.bot.reply_to(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }

    #[instrument(skip(self, query), fields(user_id = query.user.id))]
    async fn on_callback(&self, query: &CallbackQuery) -> Result<HandlerResponse> {
        if query.data.as_deref() == Some(MENU_CALLBACK) {
            match &query.chat {
                Some(chat) => self.bot.send_message(chat, &command_list()).await?,
                None => warn!(callback_id = %query.id, "Menu callback without a chat, nothing to reply to"),
            }
        }
        self.bot.answer_callback(&query.id).await?;
        Ok(HandlerResponse::Stop)
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<Event>> {
        let events = self
            .catalog
            .search_events(query)
            .await
            .map_err(catalog_error)?;
        info!(count = events.len(), category_id = ?query.category_id, "Catalog search done");
        Ok(events)
    }

    /// Stored ids resolved against the catalog; ids that fail to resolve are skipped.
    async fn resolve_list(&self, list: ListKind, user_id: i64) -> Result<Vec<Event>> {
        let ids = self.store.list(list, user_id).await.map_err(storage_error)?;

        let mut events = Vec::with_capacity(ids.len());
        for event_id in ids {
            match self.catalog.get_event(event_id).await {
                Ok(event) => events.push(event),
                Err(e) => warn!(error = %e, user_id, event_id, list = %list, "Skipping unresolved event"),
            }
        }
        Ok(events)
    }
}

#[async_trait]
impl Handler for CommandHandler {
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        match &update.kind {
            UpdateKind::Message(message) => self.on_message(message).await,
            UpdateKind::CallbackQuery(query) => self.on_callback(query).await,
            UpdateKind::Other => Ok(HandlerResponse::Ignore),
        }
    }
}
