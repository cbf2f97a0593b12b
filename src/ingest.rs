//! Post creation.
//!
//! The hosting platform's editor is the real authoring surface; this
//! command exists so a store can be populated and the search path
//! exercised from the terminal. Unlike the lenient search flags,
//! authoring input fails loudly on bad dates.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, Timelike, Utc};

use crate::config::Config;
use crate::db;
use crate::models::{NewPost, POST_TYPE, READ_MORE_MARKER, TIMESTAMP_FORMAT};
use crate::store::sqlite::SqliteStore;
use crate::store::ContentStore;

pub async fn run_add(
    config: &Config,
    title: String,
    body: Option<String>,
    status: String,
    date: Option<String>,
    embed_post: Option<i64>,
) -> Result<()> {
    let published_at = match date {
        Some(raw) => parse_publish_date(&raw)?,
        None => Utc::now()
            .naive_utc()
            .with_nanosecond(0)
            .unwrap_or_else(|| Utc::now().naive_utc()),
    };

    let mut body = body.unwrap_or_default();
    if let Some(target) = embed_post {
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(&embed_block(target));
    }

    let post = NewPost {
        post_type: POST_TYPE.to_string(),
        status,
        title: Some(title),
        body,
        published_at,
    };

    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());
    let id = store.insert_post(&post).await.context("inserting post")?;
    pool.close().await;

    println!("Created post {id}.");
    Ok(())
}

/// Serialized read-more embed block referencing another post.
fn embed_block(post_id: i64) -> String {
    format!("{READ_MORE_MARKER} {{\"postId\":{post_id}}} /-->")
}

fn parse_publish_date(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT) {
        return Ok(dt);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(d.and_hms_opt(0, 0, 0).unwrap());
    }
    bail!("invalid --date '{raw}'. Use YYYY-MM-DD or YYYY-MM-DD HH:MM:SS.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_block_carries_the_marker() {
        let block = embed_block(42);
        assert!(block.starts_with(READ_MORE_MARKER));
        assert!(block.contains("\"postId\":42"));
    }

    #[test]
    fn publish_date_accepts_both_canonical_shapes() {
        assert_eq!(
            parse_publish_date("2025-01-05").unwrap(),
            parse_publish_date("2025-01-05 00:00:00").unwrap()
        );
    }

    #[test]
    fn publish_date_rejects_other_inputs() {
        assert!(parse_publish_date("yesterday").is_err());
        assert!(parse_publish_date("2025-13-99").is_err());
    }
}
