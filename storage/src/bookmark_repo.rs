//! Bookmark repository: users plus the visited and wishlist lists.
//!
//! Uses SqlitePoolManager; each method runs one parameterized statement on a pooled connection.

use async_trait::async_trait;
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::{ListKind, UserRecord};
use crate::repository::BookmarkStore;
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct BookmarkRepository {
    pool_manager: SqlitePoolManager,
}

impl BookmarkRepository {
    /// Opens the pool and creates the tables if they do not exist.
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Creates `users`, `visited_events` and `wishlist_events` if absent. Idempotent.
    ///
    /// The list tables carry a composite primary key so that `ON CONFLICT DO NOTHING`
    /// actually deduplicates `(user_id, event_id)` pairs.
    pub async fn ensure_schema(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY,
                first_name TEXT,
                last_name TEXT,
                username TEXT
            )
            "#,
        )
        .execute(pool)
        .await?;

        for list in [ListKind::Visited, ListKind::Wishlist] {
            let sql = format!(
                r#"
                CREATE TABLE IF NOT EXISTS {} (
                    user_id INTEGER NOT NULL,
                    event_id INTEGER NOT NULL,
                    PRIMARY KEY (user_id, event_id),
                    FOREIGN KEY (user_id) REFERENCES users(id)
                )
                "#,
                list.table()
            );
            sqlx::query(&sql).execute(pool).await?;
        }

        info!("Database tables created successfully");
        Ok(())
    }

    pub async fn find_user(&self, user_id: i64) -> Result<Option<UserRecord>, StorageError> {
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT id, first_name, last_name, username FROM users WHERE id = ?",
        )
        .bind(user_id)
        .fetch_optional(self.pool_manager.pool())
        .await?;
        Ok(user)
    }

    pub async fn add_visited(&self, user_id: i64, event_id: i64) -> Result<(), StorageError> {
        self.add(ListKind::Visited, user_id, event_id).await
    }

    pub async fn add_wishlist(&self, user_id: i64, event_id: i64) -> Result<(), StorageError> {
        self.add(ListKind::Wishlist, user_id, event_id).await
    }

    pub async fn remove_visited(&self, user_id: i64, event_id: i64) -> Result<(), StorageError> {
        self.remove(ListKind::Visited, user_id, event_id).await
    }

    pub async fn remove_wishlist(&self, user_id: i64, event_id: i64) -> Result<(), StorageError> {
        self.remove(ListKind::Wishlist, user_id, event_id).await
    }

    pub async fn list_visited(&self, user_id: i64) -> Result<Vec<i64>, StorageError> {
        self.list(ListKind::Visited, user_id).await
    }

    pub async fn list_wishlist(&self, user_id: i64) -> Result<Vec<i64>, StorageError> {
        self.list(ListKind::Wishlist, user_id).await
    }
}

#[async_trait]
impl BookmarkStore for BookmarkRepository {
    async fn ensure_user(&self, user_id: i64) -> Result<(), StorageError> {
        let result = sqlx::query("INSERT INTO users (id) VALUES (?) ON CONFLICT DO NOTHING")
            .bind(user_id)
            .execute(self.pool_manager.pool())
            .await?;

        debug!(user_id, created = result.rows_affected() > 0, "Ensured user");
        Ok(())
    }

    async fn add(&self, list: ListKind, user_id: i64, event_id: i64) -> Result<(), StorageError> {
        let sql = format!(
            "INSERT INTO {} (user_id, event_id) VALUES (?, ?) ON CONFLICT DO NOTHING",
            list.table()
        );
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(event_id)
            .execute(self.pool_manager.pool())
            .await?;

        info!(
            user_id,
            event_id,
            list = %list,
            inserted = result.rows_affected(),
            "Added event to list"
        );
        Ok(())
    }

    async fn remove(&self, list: ListKind, user_id: i64, event_id: i64) -> Result<(), StorageError> {
        let sql = format!(
            "DELETE FROM {} WHERE user_id = ? AND event_id = ?",
            list.table()
        );
        let result = sqlx::query(&sql)
            .bind(user_id)
            .bind(event_id)
            .execute(self.pool_manager.pool())
            .await?;

        info!(
            user_id,
            event_id,
            list = %list,
            deleted = result.rows_affected(),
            "Removed event from list"
        );
        Ok(())
    }

    async fn list(&self, list: ListKind, user_id: i64) -> Result<Vec<i64>, StorageError> {
        let sql = format!(
            "SELECT event_id FROM {} WHERE user_id = ? ORDER BY rowid",
            list.table()
        );
        let rows: Vec<(i64,)> = sqlx::query_as(&sql)
            .bind(user_id)
            .fetch_all(self.pool_manager.pool())
            .await?;

        debug!(user_id, list = %list, count = rows.len(), "Listed events");
        Ok(rows.into_iter().map(|(event_id,)| event_id).collect())
    }
}
