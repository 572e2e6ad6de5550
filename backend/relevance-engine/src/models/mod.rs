use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A blog post candidate as read from the Post Store.
///
/// Candidates arrive document-shaped: optional fields carry explicit defaults
/// (empty title/body/tags score as empty, they are never errors). A record
/// without an `id` is malformed and is skipped during ranking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    /// Defaults to empty when absent.
    pub title: Option<String>,
    /// Defaults to empty when absent.
    pub body: Option<String>,
    /// Display order preserved; order is irrelevant to scoring.
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Denormalized count maintained by the comment operations, not recomputed here.
    #[serde(default)]
    pub comment_count: u32,
    /// Denormalized count maintained by the like operations, not recomputed here.
    #[serde(default)]
    pub likes_count: u32,
}

impl Post {
    pub fn title_text(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn body_text(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }
}

/// A user's declared interest terms. At most one record per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterestSet {
    pub user_id: Uuid,
    /// Ordered, case-normalized, deduplicated via `utils::normalize_terms`.
    pub interests: Vec<String>,
    pub updated_at: DateTime<Utc>,
}

impl InterestSet {
    /// Interest terms as the ranker consumes them: trimmed, case-folded,
    /// deduplicated, first occurrence wins.
    pub fn normalized(&self) -> Vec<String> {
        crate::utils::normalize_terms(&self.interests)
    }
}

/// A post paired with its relevance score for one ranking invocation.
///
/// Scores are only meaningful relative to a single invocation over a single
/// candidate set; they are never persisted or compared across requests.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredPost {
    pub post: Post,
    pub score: f64,
}

/// One page of an ordered result set.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}
