//! Error types for context bootstrap and per-request recommendation.

use catalog::CatalogError;
use features::FeatureError;
use neighbors::NeighborsError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecommendError {
    #[error("Breed catalog is empty; the engine cannot serve requests")]
    EmptyCatalog,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("Catalog breed '{name}' cannot be encoded: {source}")]
    InvalidCatalogEntry { name: String, source: FeatureError },

    #[error("Invalid preferences for field '{field}': {source}")]
    InvalidPreferences { field: String, source: FeatureError },

    #[error("top_k must be a positive integer")]
    InvalidTopK,

    #[error(transparent)]
    Neighbors(#[from] NeighborsError),
}

impl RecommendError {
    /// Wrap a codec failure on user input, naming the offending field
    pub fn invalid_preferences(source: FeatureError) -> Self {
        let field = source.field().unwrap_or("unknown").to_string();
        RecommendError::InvalidPreferences { field, source }
    }
}

pub type Result<T> = std::result::Result<T, RecommendError>;
