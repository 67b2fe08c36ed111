//! # Recommender Crate
//!
//! The hybrid scoring engine: group classification plus similarity search,
//! merged into a raw, ranked result.
//!
//! ## Main Components
//!
//! - **context**: `ModelContext`, the immutable state built once at startup
//! - **engine**: `RecommendationEngine`, one synchronous call per request
//! - **types**: raw result shapes and engine info
//! - **error**: bootstrap and per-request errors
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::BreedCatalog;
//! use recommender::{ModelContext, RecommendationEngine};
//! use std::sync::Arc;
//!
//! let catalog = BreedCatalog::load_from_file(Path::new("data/breeds.json"))?;
//! let context = Arc::new(ModelContext::build(catalog)?);
//! let engine = RecommendationEngine::new(context).with_group_neighbors(3);
//!
//! let raw = engine.recommend(&preferences, 5)?;
//! println!("Top breed: {}", raw.predictions[0].breed);
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod types;

pub use context::{BreedCatalogEntry, ModelContext};
pub use engine::RecommendationEngine;
pub use error::{RecommendError, Result};
pub use types::{
    EngineInfo, ModelDescription, PredictionItem, RawRecommendationResult, UserProfileEcho,
};
