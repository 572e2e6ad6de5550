use std::collections::{HashMap, HashSet};

use crate::config::RankingConfig;
use crate::models::Post;
use crate::utils::tokenize;

/// Interest-to-post text similarity scorer.
///
/// Builds a weighted term-frequency profile of the candidate post: body
/// tokens count 1.0, title tokens `title_weight` and tag tokens `tag_weight`
/// each (titles and tags carry denser signal than body prose). Each interest
/// token then contributes its profile mass, capped at the highest field
/// multiplier, and the score is the mean contribution over interest tokens.
/// A post carrying every interest token at full field weight scores 1.0; a
/// post matching none scores 0.0.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    title_weight: f64,
    tag_weight: f64,
}

impl SimilarityScorer {
    pub fn new(config: &RankingConfig) -> Self {
        Self {
            title_weight: config.title_weight,
            tag_weight: config.tag_weight,
        }
    }

    /// Score a post against a pre-tokenized interest set. Returns a value in
    /// [0, 1]. Empty interests or an empty post profile score 0.0 (callers
    /// with no interests branch to the engagement-only path before this).
    pub fn score(&self, interest_tokens: &HashSet<String>, post: &Post) -> f64 {
        if interest_tokens.is_empty() {
            return 0.0;
        }

        let profile = self.term_profile(post);
        if profile.is_empty() {
            return 0.0;
        }

        let max_term_weight = self.title_weight.max(self.tag_weight).max(1.0);
        let matched_mass: f64 = interest_tokens
            .iter()
            .filter_map(|token| profile.get(token))
            .map(|mass| mass.min(max_term_weight) / max_term_weight)
            .sum();

        matched_mass / interest_tokens.len() as f64
    }

    /// Weighted term-frequency profile over title, body and tags.
    fn term_profile(&self, post: &Post) -> HashMap<String, f64> {
        let mut profile: HashMap<String, f64> = HashMap::new();

        for token in tokenize(post.body_text()) {
            *profile.entry(token).or_default() += 1.0;
        }
        for token in tokenize(post.title_text()) {
            *profile.entry(token).or_default() += self.title_weight;
        }
        for tag in &post.tags {
            for token in tokenize(tag) {
                *profile.entry(token).or_default() += self.tag_weight;
            }
        }

        profile
    }
}

/// Tokenize curated interest terms into a lookup set. Interests carry no
/// frequency weighting.
pub fn interest_tokens(terms: &[String]) -> HashSet<String> {
    terms.iter().flat_map(|term| tokenize(term)).collect()
}
