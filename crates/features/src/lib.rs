//! # Features Crate
//!
//! Turns raw attribute records into fixed 16-dimensional vectors.
//!
//! ## Main Components
//!
//! - **vocabulary**: label encoding for categorical attributes
//! - **scaler**: median/IQR robust scaling fitted on the breed population
//! - **codec**: `FeatureCodec`, validation plus base and derived columns
//! - **vector**: column layout and `EncodedVector`
//!
//! The codec is fitted once on the catalog; user preferences are encoded
//! with the same vocabulary and scaler so they land in the same space.

pub mod codec;
pub mod error;
pub mod scaler;
pub mod vector;
pub mod vocabulary;

pub use codec::{FeatureCodec, FeatureInfo, NumericColumn};
pub use error::{FeatureError, Result};
pub use scaler::RobustScaler;
pub use vector::{EncodedVector, Feature, BASE_DIM, FEATURE_DIM};
pub use vocabulary::CategoryVocabulary;
