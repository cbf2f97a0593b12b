//! SQLite-backed [`ContentStore`] implementation.

use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::models::{NewPost, SearchCriteria, POST_TYPE, STATUS_PUBLISHED};

use super::{ContentStore, StoreError};

pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for SqliteStore {
    async fn insert_post(&self, post: &NewPost) -> Result<i64, StoreError> {
        let result = sqlx::query(
            "INSERT INTO posts (post_type, status, title, body, published_at)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&post.post_type)
        .bind(&post.status)
        .bind(&post.title)
        .bind(&post.body)
        .bind(post.published_at.and_utc().timestamp())
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    async fn find_marked(&self, criteria: &SearchCriteria) -> Result<Vec<i64>, StoreError> {
        // Bounds and marker are bound parameters, never spliced into the
        // SQL text. The store performs the ordering; callers must not
        // re-sort.
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT id
            FROM posts
            WHERE post_type = ?
              AND status = ?
              AND published_at >= ?
              AND published_at <= ?
              AND instr(body, ?) > 0
            ORDER BY published_at DESC, id DESC
            "#,
        )
        .bind(POST_TYPE)
        .bind(STATUS_PUBLISHED)
        .bind(criteria.after.and_utc().timestamp())
        .bind(criteria.before.and_utc().timestamp())
        .bind(criteria.marker)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }
}
