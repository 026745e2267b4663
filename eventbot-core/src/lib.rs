//! # eventbot-core
//!
//! Core types and traits for the events bot: [`Bot`], [`UpdateSource`], [`Handler`], update and user types,
//! and tracing initialization. Transport-agnostic; used by handler-chain, eventbot-telegram and event-bot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{Bot, UpdateSource};
pub use error::{EventbotError, Result};
pub use logger::init_tracing;
pub use types::{
    CallbackQuery, Chat, Handler, HandlerResponse, InlineButton, Message, Update, UpdateKind, User,
};
