//! Core types: user, chat, message, callback query, update, handler response, and Handler trait.
//!
//! One file per main type, mirroring the shape of the transport without depending on it.

mod button;
mod callback;
mod chat;
mod handler;
mod message;
mod response;
mod update;
mod user;

pub use button::InlineButton;
pub use callback::CallbackQuery;
pub use chat::Chat;
pub use handler::Handler;
pub use message::Message;
pub use response::HandlerResponse;
pub use update::{Update, UpdateKind};
pub use user::User;
