//! Handler trait.

use async_trait::async_trait;

use super::{response::HandlerResponse, update::Update};

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _update: &Update) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the update. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _update: &Update) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _update: &Update,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
