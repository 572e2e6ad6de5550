pub mod engagement;
pub mod similarity;

pub use engagement::EngagementScorer;
pub use similarity::SimilarityScorer;
