use crate::config::RankingConfig;
use crate::models::Post;

/// Popularity signal derived from likes and comments.
///
/// Comments weigh heavier than likes (deeper engagement), and the weighted
/// raw signal is folded through `1 - exp(-raw / scale)` so the score
/// saturates toward 1.0 instead of letting a handful of viral posts dominate
/// the whole ordering.
#[derive(Debug, Clone)]
pub struct EngagementScorer {
    like_weight: f64,
    comment_weight: f64,
    saturation_scale: f64,
}

impl EngagementScorer {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            like_weight: config.like_weight,
            comment_weight: config.comment_weight,
            saturation_scale: config.engagement_scale,
        }
    }

    /// Score in [0, 1), monotonically non-decreasing in both counts.
    /// Zero engagement scores exactly 0.0.
    pub fn score(&self, post: &Post) -> f64 {
        let raw = self.like_weight * f64::from(post.likes_count)
            + self.comment_weight * f64::from(post.comment_count);

        if raw <= 0.0 {
            return 0.0;
        }

        1.0 - (-raw / self.saturation_scale).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn post(likes: u32, comments: u32) -> Post {
        Post {
            id: Some(Uuid::new_v4()),
            author_id: None,
            title: None,
            body: None,
            tags: Vec::new(),
            published: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            comment_count: comments,
            likes_count: likes,
        }
    }

    fn scorer() -> EngagementScorer {
        EngagementScorer::new(&RankingConfig::default())
    }

    #[test]
    fn test_zero_engagement_scores_zero() {
        assert_eq!(scorer().score(&post(0, 0)), 0.0);
    }

    #[test]
    fn test_bounded_above() {
        let score = scorer().score(&post(u32::MAX, u32::MAX));
        assert!(score <= 1.0);
    }

    #[test]
    fn test_monotone_in_likes_and_comments() {
        let s = scorer();
        assert!(s.score(&post(10, 0)) > s.score(&post(5, 0)));
        assert!(s.score(&post(0, 10)) > s.score(&post(0, 5)));
        assert!(s.score(&post(10, 10)) >= s.score(&post(10, 9)));
    }

    #[test]
    fn test_comments_outweigh_likes() {
        let s = scorer();
        assert!(s.score(&post(0, 10)) > s.score(&post(10, 0)));
    }

    #[test]
    fn test_saturates() {
        let s = scorer();
        let mid = s.score(&post(100, 0));
        let high = s.score(&post(10_000, 0));
        // Two orders of magnitude more likes buys very little extra score
        assert!(high - mid < 0.15);
    }
}
