//! Core data models used throughout embedscan.
//!
//! Posts live in an external content store. The search path reads
//! identifiers only and never mutates or hydrates stored rows.

use chrono::NaiveDateTime;

/// Canonical display and input format for publication timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Type tag of searchable content.
pub const POST_TYPE: &str = "post";

/// Status of posts eligible for search and public display.
pub const STATUS_PUBLISHED: &str = "published";

/// Literal substring whose presence in a post body marks an embedded
/// read-more block. Opening delimiter only: attributes and the closing
/// `/-->` vary per embed, existence is what matters.
pub const READ_MORE_MARKER: &str = "<!-- embed:read-more";

/// A stored post row.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub post_type: String,
    pub status: String,
    pub title: Option<String>,
    pub body: String,
    pub published_at: NaiveDateTime,
}

/// Insert shape for a new post; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub post_type: String,
    pub status: String,
    pub title: Option<String>,
    pub body: String,
    pub published_at: NaiveDateTime,
}

/// Validated, normalized parameter set driving one search invocation.
///
/// Invariant: `after <= before`. Built fresh per run by
/// [`crate::daterange::resolve`], immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub after: NaiveDateTime,
    pub before: NaiveDateTime,
    pub marker: &'static str,
}

impl SearchCriteria {
    pub fn after_display(&self) -> String {
        self.after.format(TIMESTAMP_FORMAT).to_string()
    }

    pub fn before_display(&self) -> String {
        self.before.format(TIMESTAMP_FORMAT).to_string()
    }
}
