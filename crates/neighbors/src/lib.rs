//! # Neighbors Crate
//!
//! Nearest-neighbor structures over scaled breed vectors.
//!
//! ## Components
//!
//! ### Group Classifier
//! Distance-weighted kNN with breed groups as labels:
//! - Cosine distance, inverse-distance votes
//! - Scores normalized to sum to 1 (a relative score, not a probability)
//!
//! ### Similarity Index
//! Unsupervised search over every catalog breed:
//! - Similarity = 1 - cosine distance / 2, in [0, 1]
//! - Stable on ties (catalog order)
//!
//! Both structures are built once and only read afterwards, so they can be
//! shared across threads without locking.
//!
//! ## Example Usage
//!
//! ```ignore
//! use neighbors::{GroupClassifier, IndexEntry, SimilarityIndex};
//!
//! let classifier = GroupClassifier::fit(vectors.clone(), groups)?;
//! let index = SimilarityIndex::build(entries)?;
//!
//! let groups = classifier.classify_groups(&user_vector, 3);
//! let similar = index.search_similar(&user_vector, 5);
//! ```

pub mod classifier;
pub mod distance;
pub mod error;
pub mod similarity;
pub mod types;

pub use classifier::{GroupClassifier, DEFAULT_GROUP_NEIGHBORS};
pub use distance::{cosine_distance, cosine_similarity};
pub use error::{NeighborsError, Result};
pub use similarity::{IndexEntry, SimilarityIndex, DEFAULT_TOP_K};
pub use types::{GroupPrediction, SimilarityItem};
