use serde::Serialize;

/// A breed ready for display, either from the catalog or a placeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedBreed {
    pub name: String,
    pub size: String,
    pub breed_group: String,
    pub shedding: String,
    pub exercise_needs: Option<f64>,
    pub good_with_children: Option<bool>,
    pub intelligence: Option<f64>,
    pub training_difficulty: Option<f64>,
    pub health_risk: String,
    pub friendliness: Option<f64>,
    pub life_expectancy: Option<String>,
    pub average_weight: Option<f64>,
    pub description: Option<String>,
    pub temperament: Vec<String>,
    pub care: Vec<String>,
    pub history: Option<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopPrediction {
    pub name: String,
    /// Percentage in [0, 100]
    pub score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarBreed {
    pub breed: String,
    /// Percentage in [0, 100]
    pub similarity_score: u8,
}

/// The externally visible recommendation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub breed: ResolvedBreed,
    /// Integer in [0, 95]
    pub compatibility_score: u8,
    /// One to three explanation strings
    pub match_reasons: Vec<String>,
    pub top_predictions: Vec<TopPrediction>,
    /// Never repeats the recommended breed
    pub similar_breeds: Vec<SimilarBreed>,
}
