//! Search command orchestration.
//!
//! Date-validation failures are operator input problems: they are
//! reported as a stderr warning and the invocation still exits
//! successfully, without searching. Store failures are fatal and
//! propagate with a labeled message so "query failed" is never
//! mistaken for "no matches".

use std::io::{self, Write};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::config::Config;
use crate::daterange;
use crate::db;
use crate::emit;
use crate::models::SearchCriteria;
use crate::store::sqlite::SqliteStore;
use crate::store::ContentStore;

pub async fn run_search(
    config: &Config,
    date_after: Option<String>,
    date_before: Option<String>,
    strict_dates: bool,
) -> Result<()> {
    let resolved = match daterange::resolve(
        date_after.as_deref(),
        date_before.as_deref(),
        Utc::now(),
        config.search.window_days,
        strict_dates,
    ) {
        Ok(resolved) => resolved,
        Err(err) => {
            eprintln!("Warning: {err}");
            return Ok(());
        }
    };

    for notice in &resolved.fallbacks {
        eprintln!(
            "Warning: unrecognized --{} value '{}'; using {} instead.",
            notice.flag, notice.rejected, notice.substituted
        );
    }

    let pool = db::connect(config).await?;
    let store = SqliteStore::new(pool.clone());

    let mut stdout = io::stdout();
    search_and_emit(&store, &resolved.criteria, &mut stdout).await?;

    pool.close().await;
    Ok(())
}

/// Query the store and emit the identifier list to `out`.
pub async fn search_and_emit<W: Write>(
    store: &dyn ContentStore,
    criteria: &SearchCriteria,
    out: &mut W,
) -> Result<()> {
    let ids = store
        .find_marked(criteria)
        .await
        .context("marker search query failed")?;
    emit::emit_results(out, &ids, criteria)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewPost, POST_TYPE, READ_MORE_MARKER, STATUS_PUBLISHED, TIMESTAMP_FORMAT};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDateTime;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[tokio::test]
    async fn searches_store_and_writes_ids() {
        let store = InMemoryStore::new();
        let id = store
            .insert_post(&NewPost {
                post_type: POST_TYPE.to_string(),
                status: STATUS_PUBLISHED.to_string(),
                title: None,
                body: format!("{READ_MORE_MARKER} /-->"),
                published_at: ts("2025-01-05 00:00:00"),
            })
            .await
            .unwrap();

        let criteria = SearchCriteria {
            after: ts("2025-01-01 00:00:00"),
            before: ts("2025-01-31 00:00:00"),
            marker: READ_MORE_MARKER,
        };

        let mut out = Vec::new();
        search_and_emit(&store, &criteria, &mut out).await.unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{id}\n"));
    }

    #[tokio::test]
    async fn empty_store_reports_informational_line() {
        let store = InMemoryStore::new();
        let criteria = SearchCriteria {
            after: ts("2025-01-01 00:00:00"),
            before: ts("2025-01-31 00:00:00"),
            marker: READ_MORE_MARKER,
        };

        let mut out = Vec::new();
        search_and_emit(&store, &criteria, &mut out).await.unwrap();
        assert!(String::from_utf8(out).unwrap().starts_with("No posts found between"));
    }
}
