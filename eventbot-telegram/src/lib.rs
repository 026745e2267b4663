//! # eventbot-telegram
//!
//! Telegram transport layer: update adapters, [`eventbot_core::Bot`] / [`eventbot_core::UpdateSource`]
//! implementation, minimal config, and the polling loop that feeds a [`handler_chain::HandlerChain`].
//! No persistence or catalog logic lives here.

mod adapters;
mod bot_adapter;
mod chunks;
mod config;
mod runner;

pub use adapters::{TelegramUpdateWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use chunks::{split_message, TELEGRAM_MAX_MESSAGE_CHARS};
pub use config::TelegramConfig;
pub use runner::{poll_once, run_polling, PollCursor, PollingOptions, DEFAULT_MAX_ATTEMPTS};
