//! Storage crate: bookmark persistence (users, visited and wishlist lists).
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – ListKind, UserRecord
//! - [`repository`] – BookmarkStore trait
//! - [`bookmark_repo`] – BookmarkRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod bookmark_repo;
mod error;
mod models;
mod repository;
mod sqlite_pool;


pub use bookmark_repo::BookmarkRepository;
pub use error::StorageError;
pub use models::{ListKind, UnknownListKind, UserRecord};
pub use repository::BookmarkStore;
pub use sqlite_pool::SqlitePoolManager;
