use thiserror::Error;

/// Result type for relevance-engine operations
pub type Result<T> = std::result::Result<T, RankingError>;

/// Errors surfaced by the ranking engine.
///
/// The taxonomy is narrow because the engine is pure: empty text, empty tags
/// and empty interests are all valid inputs handled with zero or fallback
/// scores. Malformed candidates are skipped with a warning, never an error.
#[derive(Debug, Error)]
pub enum RankingError {
    /// Client-input error; pagination parameters are rejected, never clamped.
    #[error("invalid pagination request: page={page}, page_size={page_size} (both must be >= 1)")]
    InvalidPagination { page: usize, page_size: usize },

    /// A collaborator store call failed.
    #[error("store error: {0}")]
    Store(#[from] anyhow::Error),
}
