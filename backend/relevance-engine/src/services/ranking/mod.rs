use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::config::RankingConfig;
use crate::error::Result;
use crate::models::{Page, Post, ScoredPost};
use crate::services::pagination;
use crate::services::scoring::similarity::interest_tokens;
use crate::services::scoring::{EngagementScorer, SimilarityScorer};
use crate::utils::normalize_terms;

/// Orders a candidate set for one feed or search request.
///
/// With interests present the score is
/// `blend_weight * similarity + (1 - blend_weight) * engagement`; without
/// interests the ordering is pure engagement (the fallback for anonymous or
/// interest-less users). Browse and search both go through this one path so
/// the two surfaces order identically.
pub struct RelevanceRanker {
    similarity: SimilarityScorer,
    engagement: EngagementScorer,
    blend_weight: f64,
}

impl Default for RelevanceRanker {
    fn default() -> Self {
        Self::new(&RankingConfig::default())
    }
}

impl RelevanceRanker {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            similarity: SimilarityScorer::new(config),
            engagement: EngagementScorer::new(config),
            blend_weight: config.blend_weight,
        }
    }

    /// Score and order a candidate snapshot, highest score first.
    ///
    /// Candidates missing a post id are skipped with a warning; one corrupt
    /// record must not fail the whole feed. Ties resolve by newest
    /// `created_at` first so page boundaries stay deterministic.
    pub fn rank(&self, candidates: Vec<Post>, interests: Option<&[String]>) -> Vec<ScoredPost> {
        let terms = interests.map(normalize_terms).unwrap_or_default();
        let tokens = interest_tokens(&terms);
        let blended = !tokens.is_empty();

        let input_count = candidates.len();
        let mut scored: Vec<ScoredPost> = candidates
            .into_iter()
            .filter(|post| {
                if post.id.is_none() {
                    warn!("candidate missing post id, skipping");
                    return false;
                }
                true
            })
            .map(|post| {
                let score = if blended {
                    self.blend_weight * self.similarity.score(&tokens, &post)
                        + (1.0 - self.blend_weight) * self.engagement.score(&post)
                } else {
                    self.engagement.score(&post)
                };
                ScoredPost { post, score }
            })
            .collect();

        // Score descending, then newest first on ties.
        // NaN never comes out of the scorers; Equal keeps the sort total anyway.
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| b.post.created_at.cmp(&a.post.created_at))
        });

        debug!(
            input_count,
            ranked_count = scored.len(),
            blended,
            "ranking pass completed"
        );

        scored
    }

    /// Rank the full candidate set once, then slice the requested page.
    /// Fails fast on `page < 1` or `page_size < 1`.
    pub fn rank_page(
        &self,
        candidates: Vec<Post>,
        interests: Option<&[String]>,
        page: usize,
        page_size: usize,
    ) -> Result<Page<ScoredPost>> {
        pagination::validate(page, page_size)?;
        pagination::paginate(self.rank(candidates, interests), page, page_size)
    }
}
