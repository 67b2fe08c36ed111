use features::FeatureInfo;
use neighbors::{GroupPrediction, SimilarityItem};
use serde::Serialize;

/// Breed-level prediction after merging group and similarity scores
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionItem {
    pub breed: String,
    /// Group score of the breed's group if classified, else its similarity
    pub score: f64,
    /// Dense, 1-based
    pub rank: usize,
}

/// Derived summary of the user's own vector.
///
/// Diagnostic only; nothing downstream of the engine feeds it back into
/// scoring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UserProfileEcho {
    pub family_friendly: f64,
    pub energy_level: f64,
    pub maintenance_level: f64,
    pub intelligence_level: f64,
    pub size_preference: f64,
}

/// Everything the engine produces for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawRecommendationResult {
    pub predictions: Vec<PredictionItem>,
    pub similar_breeds: Vec<SimilarityItem>,
    pub group_predictions: Vec<GroupPrediction>,
    pub user_profile: UserProfileEcho,
}

impl RawRecommendationResult {
    /// Group score for a label, if the classifier returned that group
    pub fn group_score(&self, group: &str) -> Option<f64> {
        self.group_predictions
            .iter()
            .find(|g| g.group == group)
            .map(|g| g.score)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelDescription {
    pub name: String,
    pub description: String,
}

/// Static description of the loaded engine
#[derive(Debug, Clone, Serialize)]
pub struct EngineInfo {
    pub breed_count: usize,
    pub groups: Vec<String>,
    pub models: Vec<ModelDescription>,
    pub features: FeatureInfo,
}
