use serde::Deserialize;
use std::env;

/// Tunable scoring constants for the relevance ranking engine.
///
/// The values are empirically chosen product knobs, not contracts. The only
/// intent they encode: similarity should dominate engagement when interests
/// are present, and title/tag terms carry more signal than body terms.
#[derive(Debug, Clone, Deserialize)]
pub struct RankingConfig {
    /// Share of the final score attributed to interest similarity (the rest
    /// is engagement). Only applies when the user has interests.
    pub blend_weight: f64,
    /// Term-frequency multiplier for title tokens.
    pub title_weight: f64,
    /// Term-frequency multiplier for tag tokens.
    pub tag_weight: f64,
    /// Weight of a like in the raw engagement signal.
    pub like_weight: f64,
    /// Weight of a comment in the raw engagement signal.
    pub comment_weight: f64,
    /// Saturation scale for the engagement fold; raw signal around this value
    /// maps to ~0.63, so viral posts cannot dominate the ordering.
    pub engagement_scale: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            blend_weight: 0.8,
            title_weight: 2.0,
            tag_weight: 3.0,
            like_weight: 1.0,
            comment_weight: 2.0,
            engagement_scale: 50.0,
        }
    }
}

impl RankingConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        Self {
            blend_weight: env_f64("RANKING_BLEND_WEIGHT", defaults.blend_weight),
            title_weight: env_f64("RANKING_TITLE_WEIGHT", defaults.title_weight),
            tag_weight: env_f64("RANKING_TAG_WEIGHT", defaults.tag_weight),
            like_weight: env_f64("RANKING_LIKE_WEIGHT", defaults.like_weight),
            comment_weight: env_f64("RANKING_COMMENT_WEIGHT", defaults.comment_weight),
            engagement_scale: env_f64("RANKING_ENGAGEMENT_SCALE", defaults.engagement_scale),
        }
    }
}

fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .map(|raw| {
            raw.parse()
                .unwrap_or_else(|_| panic!("{} must be a valid f64", key))
        })
        .unwrap_or(default)
}
