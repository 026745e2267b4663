//! # Event bot application
//!
//! Wires handler-chain, storage, timepad-client and eventbot-telegram. Loads config from env and
//! runs the polling loop.
//!
//! Commands: `/start`, `/search [text]`, `/addtolist <visited|wishlist> <id>`,
//! `/removefromlist <visited|wishlist> <id>`, `/recommendations`, `/getwishlist`, `/getvisitedlist`.

pub mod cli;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod runner;

pub use cli::{load_config, Cli, Commands};
pub use commands::Command;
pub use config::BotConfig;
pub use handlers::{CommandHandler, LoggingHandler, RECOMMENDATIONS_CATEGORY_ID};
pub use runner::{build_catalog, build_handler_chain, run_bot};
