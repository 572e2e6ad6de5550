pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod stores;
pub mod utils;

pub use config::RankingConfig;
pub use error::{RankingError, Result};
pub use models::{InterestSet, Page, Post, ScoredPost};
pub use services::{FeedService, RelevanceRanker};
pub use stores::{CandidateFilter, InterestStore, PostStore};
