//! [`BookmarkStore`]: the persistence seam the command dispatcher depends on.
//! [`crate::BookmarkRepository`] is the SQLite implementation.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::models::ListKind;

/// Per-user event bookmarks. Every call is an independent statement; there is no cross-call transaction.
#[async_trait]
pub trait BookmarkStore: Send + Sync {
    /// Inserts the user row if absent.
    async fn ensure_user(&self, user_id: i64) -> Result<(), StorageError>;
    /// Inserts the pair into the list; a repeated pair is ignored.
    async fn add(&self, list: ListKind, user_id: i64, event_id: i64) -> Result<(), StorageError>;
    /// Deletes the exact pair; succeeds when nothing matched.
    async fn remove(&self, list: ListKind, user_id: i64, event_id: i64) -> Result<(), StorageError>;
    /// Event ids in the list, in insertion order.
    async fn list(&self, list: ListKind, user_id: i64) -> Result<Vec<i64>, StorageError>;
}
