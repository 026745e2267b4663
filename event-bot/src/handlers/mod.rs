//! Handlers registered in the chain: logging first, then command dispatch.

mod command_handler;
mod logging;

pub use command_handler::{CommandHandler, RECOMMENDATIONS_CATEGORY_ID};
pub use logging::LoggingHandler;
