use serde::{Deserialize, Serialize};

/// Group-level score from the classifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPrediction {
    pub group: String,
    /// Share of the neighbor vote, scores of one query sum to 1
    pub score: f64,
    /// 1-based position in the ranked list
    pub rank: usize,
}

/// One nearest breed returned by the similarity index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityItem {
    pub breed: String,
    /// Relative closeness in [0, 1]
    pub similarity: f64,
    pub rank: usize,
    pub group: Option<String>,
}
