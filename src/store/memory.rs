//! In-memory [`ContentStore`] implementation for testing.
//!
//! Holds rows in a `Vec` behind `std::sync::RwLock` and applies the
//! same filter and ordering semantics as the SQLite store.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::models::{NewPost, Post, SearchCriteria, POST_TYPE, STATUS_PUBLISHED};

use super::{ContentStore, StoreError};

#[derive(Default)]
pub struct InMemoryStore {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContentStore for InMemoryStore {
    async fn insert_post(&self, post: &NewPost) -> Result<i64, StoreError> {
        let mut posts = self.posts.write().unwrap();
        let id = posts.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        posts.push(Post {
            id,
            post_type: post.post_type.clone(),
            status: post.status.clone(),
            title: post.title.clone(),
            body: post.body.clone(),
            published_at: post.published_at,
        });
        Ok(id)
    }

    async fn find_marked(&self, criteria: &SearchCriteria) -> Result<Vec<i64>, StoreError> {
        let posts = self.posts.read().unwrap();
        let mut matches: Vec<(NaiveDateTime, i64)> = posts
            .iter()
            .filter(|p| p.post_type == POST_TYPE)
            .filter(|p| p.status == STATUS_PUBLISHED)
            .filter(|p| p.published_at >= criteria.after && p.published_at <= criteria.before)
            .filter(|p| p.body.contains(criteria.marker))
            .map(|p| (p.published_at, p.id))
            .collect();
        // (timestamp, id) tuple comparison reversed: newest first, then
        // highest id on ties.
        matches.sort_by(|a, b| b.cmp(a));
        Ok(matches.into_iter().map(|(_, id)| id).collect())
    }
}
