//! # Presenter Crate
//!
//! Calibration and mapping of raw engine output into the response shown to
//! users.
//!
//! ## Main Components
//!
//! - **mapper**: `Presenter`, breed resolution with placeholder fallback
//! - **calibration**: capped compatibility score and percentage sanitation
//! - **rule_pipeline** / **rules**: ordered explanation rules, at most three
//!   reasons, with a generic fallback
//! - **types**: the camelCase response shape
//!
//! ## Example Usage
//!
//! ```ignore
//! use presenter::Presenter;
//!
//! let presenter = Presenter::new().with_default_image("/img/default.jpg");
//! let raw = engine.recommend(&preferences, 5)?;
//! let result = presenter.present(&raw, engine.context().entries());
//! println!("{} ({}%)", result.breed.name, result.compatibility_score);
//! ```

pub mod calibration;
pub mod mapper;
pub mod rule_pipeline;
pub mod rules;
pub mod traits;
pub mod types;

pub use calibration::{CALIBRATION_EPSILON, COMPATIBILITY_CAP};
pub use mapper::{Presenter, DEFAULT_IMAGE};
pub use rule_pipeline::{ExplanationPipeline, FALLBACK_REASON, MAX_MATCH_REASONS};
pub use traits::{MatchContext, MatchRule};
pub use types::{RecommendationResult, ResolvedBreed, SimilarBreed, TopPrediction};
