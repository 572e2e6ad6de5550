pub mod feed;
pub mod pagination;
pub mod ranking;
pub mod scoring;

pub use feed::FeedService;
pub use ranking::RelevanceRanker;
pub use scoring::{EngagementScorer, SimilarityScorer};
