//! Storage abstraction for the post search pipeline.
//!
//! [`ContentStore`] is the seam between the commands and the backing
//! content store. The binary injects the SQLite implementation; tests
//! substitute [`memory::InMemoryStore`]. There is no global storage
//! handle anywhere in the crate.

pub mod memory;
pub mod sqlite;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{NewPost, SearchCriteria};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying store failed to execute a query.
    #[error("storage query failed: {0}")]
    Query(#[from] sqlx::Error),
}

#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Insert a post, returning its store-assigned identifier.
    async fn insert_post(&self, post: &NewPost) -> Result<i64, StoreError>;

    /// Return identifiers of published posts whose body contains the
    /// criteria marker and whose publication timestamp lies within the
    /// inclusive bounds, ordered by publication timestamp descending
    /// with identifier descending as the tie-break.
    ///
    /// Issues a single query and never hydrates post bodies.
    async fn find_marked(&self, criteria: &SearchCriteria) -> Result<Vec<i64>, StoreError>;
}
