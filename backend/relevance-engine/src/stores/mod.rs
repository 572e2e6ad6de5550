//! Read-only collaborator contracts consumed by the ranking engine.
//!
//! The engine never constructs database queries and never writes; it receives
//! already-filtered candidate snapshots and a user's declared interests from
//! whatever persistence layer the surrounding application wires in.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use uuid::Uuid;

use crate::models::Post;

/// Filter describing the candidate set for one request. The store applies it;
/// the engine only consumes the result.
#[derive(Debug, Clone)]
pub struct CandidateFilter {
    pub published_only: bool,
    /// Restrict candidates to posts carrying this tag.
    pub tag: Option<String>,
    /// Case-insensitive match against title and body (the search surface).
    pub search: Option<String>,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            published_only: true,
            tag: None,
            search: None,
        }
    }
}

impl CandidateFilter {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Self::default()
        }
    }

    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    async fn list_candidates(&self, filter: &CandidateFilter) -> anyhow::Result<Vec<Post>>;
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait InterestStore: Send + Sync {
    /// `None` when the user has no interest record (at most one exists per
    /// user); callers fall back to engagement-only ordering.
    async fn get_interests(&self, user_id: Uuid) -> anyhow::Result<Option<Vec<String>>>;
}
