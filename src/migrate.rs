use anyhow::Result;

use crate::config::Config;
use crate::db;

pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = db::connect(config).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            post_type TEXT NOT NULL DEFAULT 'post',
            status TEXT NOT NULL,
            title TEXT,
            body TEXT NOT NULL,
            published_at INTEGER NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    // Covers the search filter; the marker predicate still scans the
    // candidate rows.
    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_posts_type_status_published
         ON posts(post_type, status, published_at DESC)",
    )
    .execute(&pool)
    .await?;

    pool.close().await;
    Ok(())
}
