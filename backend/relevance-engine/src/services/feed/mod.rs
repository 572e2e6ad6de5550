use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{Page, ScoredPost};
use crate::services::pagination;
use crate::services::ranking::RelevanceRanker;
use crate::stores::{CandidateFilter, InterestStore, PostStore};

/// The upward-facing rank+paginate operation.
///
/// Collaborator stores are injected rather than reached through any global
/// handle; each call reads one immutable snapshot of candidates and interests
/// and holds no state across requests. Browse and search differ only in the
/// filter the Post Store applies; scoring and ordering are identical.
pub struct FeedService {
    ranker: RelevanceRanker,
    post_store: Arc<dyn PostStore>,
    interest_store: Arc<dyn InterestStore>,
}

impl FeedService {
    pub fn new(
        ranker: RelevanceRanker,
        post_store: Arc<dyn PostStore>,
        interest_store: Arc<dyn InterestStore>,
    ) -> Self {
        Self {
            ranker,
            post_store,
            interest_store,
        }
    }

    /// Rank the filtered candidate set for a (possibly anonymous) user and
    /// return one page. Users without an interest record get the
    /// engagement-only ordering.
    pub async fn browse(
        &self,
        user_id: Option<Uuid>,
        filter: &CandidateFilter,
        page: usize,
        page_size: usize,
    ) -> Result<Page<ScoredPost>> {
        pagination::validate(page, page_size)?;

        let candidates = self.post_store.list_candidates(filter).await?;
        let interests = match user_id {
            Some(user_id) => self.interest_store.get_interests(user_id).await?,
            None => None,
        };

        debug!(
            candidate_count = candidates.len(),
            has_interests = interests.as_ref().is_some_and(|i| !i.is_empty()),
            page,
            page_size,
            "ranking feed page"
        );

        self.ranker
            .rank_page(candidates, interests.as_deref(), page, page_size)
    }

    /// Search surface: the store narrows candidates with a case-insensitive
    /// title/body predicate, then the same ranking path orders them.
    pub async fn search(
        &self,
        user_id: Option<Uuid>,
        query: &str,
        page: usize,
        page_size: usize,
    ) -> Result<Page<ScoredPost>> {
        self.browse(user_id, &CandidateFilter::search(query), page, page_size)
            .await
    }
}
