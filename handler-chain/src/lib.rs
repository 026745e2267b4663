//! # Handler chain
//!
//! Runs a sequence of handlers for each update. Each handler has optional before/handle/after: all
//! before run in order (any false stops the chain); then handle runs until Stop or Reply; then all
//! after run in reverse. An error from any phase aborts the update and is returned to the caller.

use eventbot_core::{Handler, HandlerResponse, Result, Update};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs all before → handle until Stop/Reply → all after in reverse.
    #[instrument(skip(self, update), fields(update_id = update.id))]
    pub async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let mut final_response = HandlerResponse::Continue;
        let user_id = update.user_id();

        debug!(user_id = ?user_id, kind = update.kind_name(), "step: handler_chain started");

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(update).await? {
                info!(user_id = ?user_id, handler = %name, "step: before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(update).await?;
            debug!(handler = %name, response = ?response, "Handler processed");

            match response {
                HandlerResponse::Stop | HandlerResponse::Reply(_) => {
                    debug!(user_id = ?user_id, handler = %name, "step: handler chain stopped by handler");
                    final_response = response;
                    break;
                }
                HandlerResponse::Continue | HandlerResponse::Ignore => {}
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(update, &final_response).await?;
        }

        debug!(user_id = ?user_id, "step: handler_chain finished");

        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
