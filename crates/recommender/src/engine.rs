//! # Recommendation Engine
//!
//! Coordinates one request against the shared model context:
//! 1. Encode preferences (unscaled for the profile echo, scaled for search)
//! 2. Classify groups
//! 3. Search similar breeds
//! 4. Merge into breed-level predictions and dense-rank them
//! 5. Echo the derived user profile
//!
//! Any codec failure rejects the whole request as `InvalidPreferences`.

use crate::context::ModelContext;
use crate::error::{RecommendError, Result};
use crate::types::{
    EngineInfo, ModelDescription, PredictionItem, RawRecommendationResult, UserProfileEcho,
};
use catalog::{Attribute, RawAttributeRecord};
use features::{EncodedVector, Feature};
use neighbors::{GroupPrediction, SimilarityItem, DEFAULT_GROUP_NEIGHBORS, DEFAULT_TOP_K};
use std::cmp::Ordering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, instrument};

/// Stateless request handler over a shared, read-only context
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    context: Arc<ModelContext>,
    group_neighbors: usize,
    default_top_k: usize,
}

impl RecommendationEngine {
    pub fn new(context: Arc<ModelContext>) -> Self {
        Self {
            context,
            group_neighbors: DEFAULT_GROUP_NEIGHBORS,
            default_top_k: DEFAULT_TOP_K,
        }
    }

    /// Configure the classifier's neighbor count (default: 3)
    pub fn with_group_neighbors(mut self, k: usize) -> Self {
        self.group_neighbors = k;
        self
    }

    /// Configure the `top_k` used by `recommend_default` (default: 5)
    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self
    }

    pub fn context(&self) -> &Arc<ModelContext> {
        &self.context
    }

    pub fn default_top_k(&self) -> usize {
        self.default_top_k
    }

    pub fn recommend_default(
        &self,
        preferences: &RawAttributeRecord,
    ) -> Result<RawRecommendationResult> {
        self.recommend(preferences, self.default_top_k)
    }

    /// Produce the raw recommendation for one set of preferences
    #[instrument(skip(self, preferences))]
    pub fn recommend(
        &self,
        preferences: &RawAttributeRecord,
        top_k: usize,
    ) -> Result<RawRecommendationResult> {
        let start = Instant::now();
        if top_k == 0 {
            return Err(RecommendError::InvalidTopK);
        }

        let codec = self.context.codec();
        let user_vector = codec
            .encode(preferences)
            .map_err(RecommendError::invalid_preferences)?;
        let scaled = codec.scale(&user_vector);

        let group_predictions = self
            .context
            .classifier()
            .classify_groups(&scaled, self.group_neighbors);
        debug!("Classified {} groups", group_predictions.len());

        let similar_breeds = self.context.index().search_similar(&scaled, top_k);
        debug!("Found {} similar breeds", similar_breeds.len());

        let predictions = merge_predictions(&similar_breeds, &group_predictions);
        let user_profile = profile_echo(&user_vector);

        debug!(
            "Recommendation produced {} predictions in {:.2?}",
            predictions.len(),
            start.elapsed()
        );
        Ok(RawRecommendationResult {
            predictions,
            similar_breeds,
            group_predictions,
            user_profile,
        })
    }

    /// Describe the loaded models and feature schema
    pub fn engine_info(&self) -> EngineInfo {
        EngineInfo {
            breed_count: self.context.len(),
            groups: self.context.groups().to_vec(),
            models: vec![
                ModelDescription {
                    name: "group_classifier".to_string(),
                    description: format!(
                        "k-nearest neighbors over breed groups (k={}), cosine distance, inverse-distance weights",
                        self.group_neighbors
                    ),
                },
                ModelDescription {
                    name: "similarity_index".to_string(),
                    description: format!(
                        "nearest neighbors over {} breeds, cosine distance, similarity = 1 - distance / 2",
                        self.context.index().len()
                    ),
                },
            ],
            features: self.context.codec().feature_info(),
        }
    }
}

/// Map similarity items onto breed-level predictions.
///
/// A breed's score is its group's classifier score when that group was
/// returned, else its own similarity. Ordering is score desc, then
/// similarity desc; the input is already in similarity/catalog order and
/// the sort is stable, so catalog position breaks any remaining tie.
/// Ranks are dense over the combined score alone.
fn merge_predictions(
    similar: &[SimilarityItem],
    groups: &[GroupPrediction],
) -> Vec<PredictionItem> {
    let mut merged: Vec<(&SimilarityItem, f64)> = similar
        .iter()
        .map(|item| {
            let group_score = item
                .group
                .as_deref()
                .and_then(|g| groups.iter().find(|p| p.group == g))
                .map(|p| p.score);
            (item, group_score.unwrap_or(item.similarity))
        })
        .collect();

    merged.sort_by(|a, b| {
        compare_desc(a.1, b.1).then(compare_desc(a.0.similarity, b.0.similarity))
    });

    let mut predictions = Vec::with_capacity(merged.len());
    let mut rank = 0;
    let mut previous: Option<f64> = None;
    for (item, score) in merged {
        if previous != Some(score) {
            rank += 1;
            previous = Some(score);
        }
        predictions.push(PredictionItem {
            breed: item.breed.clone(),
            score,
            rank,
        });
    }
    predictions
}

fn compare_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Profile echo from the unscaled user vector
fn profile_echo(vector: &EncodedVector) -> UserProfileEcho {
    let value = |feature: Feature| vector.get(feature) as f64;
    UserProfileEcho {
        family_friendly: round_to(value(Feature::FamilyCompatibilityScore), 2),
        energy_level: round_to(value(Feature::EnergyScore), 2),
        maintenance_level: round_to(value(Feature::MaintenanceScore), 2),
        intelligence_level: round_to(value(Feature::Base(Attribute::IntelligenceRating)), 1),
        size_preference: round_to(value(Feature::SizeScore), 1),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
