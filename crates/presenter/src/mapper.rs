//! # Presenter
//!
//! Turns a raw engine result into the externally visible recommendation:
//! 1. Pick the top prediction and resolve it against the catalog
//!    (placeholder when unresolved)
//! 2. Derive the capped compatibility score
//! 3. Run the explanation rules
//! 4. Convert predictions and similar breeds to percentages, dropping the
//!    recommended breed from the similar list
//!
//! `present` is pure: the same input always yields the same output.

use crate::calibration::{compatibility_score, to_percentage};
use crate::rule_pipeline::ExplanationPipeline;
use crate::traits::MatchContext;
use crate::types::{RecommendationResult, ResolvedBreed, SimilarBreed, TopPrediction};
use catalog::{normalize_name, Attribute, AttributeValue, SizeLabel, UNKNOWN};
use recommender::{BreedCatalogEntry, RawRecommendationResult};
use tracing::{debug, instrument, warn};

/// Image used for placeholders and breeds without a curated picture
pub const DEFAULT_IMAGE: &str = "/dog_breeds_img/default.jpg";

pub struct Presenter {
    default_image: String,
    rules: ExplanationPipeline,
}

impl Presenter {
    pub fn new() -> Self {
        Self {
            default_image: DEFAULT_IMAGE.to_string(),
            rules: ExplanationPipeline::standard(),
        }
    }

    /// Configure the fallback image (default: `DEFAULT_IMAGE`)
    pub fn with_default_image(mut self, image: impl Into<String>) -> Self {
        self.default_image = image.into();
        self
    }

    /// Replace the explanation rules (default: `ExplanationPipeline::standard()`)
    pub fn with_rules(mut self, rules: ExplanationPipeline) -> Self {
        self.rules = rules;
        self
    }

    /// Build the external recommendation from a raw engine result
    #[instrument(skip_all, fields(predictions = raw.predictions.len()))]
    pub fn present(
        &self,
        raw: &RawRecommendationResult,
        catalog: &[BreedCatalogEntry],
    ) -> RecommendationResult {
        let (top_name, best_similarity) = top_prediction(raw);
        let top_key = normalize_name(top_name);
        let breed = self.resolve(top_name, catalog);

        let group = raw
            .similar_breeds
            .iter()
            .find(|s| normalize_name(&s.breed) == top_key)
            .and_then(|s| s.group.clone())
            .unwrap_or_else(|| breed.breed_group.clone());
        let compatibility =
            compatibility_score(raw.group_score(&group), best_similarity, &raw.similar_breeds);

        let match_reasons = self.rules.explain(&MatchContext {
            profile: &raw.user_profile,
            breed: &breed,
        });

        let top_predictions = raw
            .predictions
            .iter()
            .map(|p| TopPrediction {
                name: p.breed.clone(),
                score: to_percentage(p.score),
            })
            .collect();
        let similar_breeds: Vec<SimilarBreed> = raw
            .similar_breeds
            .iter()
            .filter(|s| normalize_name(&s.breed) != top_key)
            .map(|s| SimilarBreed {
                breed: s.breed.clone(),
                similarity_score: to_percentage(s.similarity),
            })
            .collect();

        debug!(
            "Presented '{}' with compatibility {} and {} similar breeds",
            breed.name,
            compatibility,
            similar_breeds.len()
        );
        RecommendationResult {
            breed,
            compatibility_score: compatibility,
            match_reasons,
            top_predictions,
            similar_breeds,
        }
    }

    /// Resolve a breed name against the catalog, trimmed and case-insensitive.
    ///
    /// Unknown names produce a placeholder instead of an error.
    pub fn resolve(&self, name: &str, catalog: &[BreedCatalogEntry]) -> ResolvedBreed {
        let key = normalize_name(name);
        match catalog.iter().find(|e| normalize_name(e.name()) == key) {
            Some(entry) => self.from_entry(entry),
            None => {
                warn!("Breed '{}' not found in catalog, using placeholder", name.trim());
                self.placeholder(name)
            }
        }
    }

    fn from_entry(&self, entry: &BreedCatalogEntry) -> ResolvedBreed {
        let record = &entry.record;
        let attr = |a: Attribute| record.attributes.get(a);
        let metadata = record.metadata.clone();

        ResolvedBreed {
            name: record.name.clone(),
            size: record.size().as_str().to_string(),
            breed_group: entry.group.clone(),
            shedding: attr(Attribute::SheddingLevel).shedding_level().as_str().to_string(),
            exercise_needs: attr(Attribute::ExerciseRequirements).as_number(),
            good_with_children: attr(Attribute::GoodWithChildren).children_flag(),
            intelligence: attr(Attribute::IntelligenceRating).as_number(),
            training_difficulty: attr(Attribute::TrainingDifficulty).as_number(),
            health_risk: attr(Attribute::HealthIssuesRisk).health_risk().as_str().to_string(),
            friendliness: attr(Attribute::FriendlyRating).as_number(),
            life_expectancy: display_text(attr(Attribute::LifeSpan)),
            average_weight: attr(Attribute::AverageWeight).as_number(),
            description: metadata.description,
            temperament: metadata.temperament,
            care: metadata.care,
            history: metadata.history,
            images: if metadata.images.is_empty() {
                vec![self.default_image.clone()]
            } else {
                metadata.images
            },
        }
    }

    fn placeholder(&self, name: &str) -> ResolvedBreed {
        ResolvedBreed {
            name: name.to_string(),
            size: SizeLabel::Medium.as_str().to_string(),
            breed_group: UNKNOWN.to_string(),
            shedding: UNKNOWN.to_string(),
            exercise_needs: None,
            good_with_children: None,
            intelligence: None,
            training_difficulty: None,
            health_risk: UNKNOWN.to_string(),
            friendliness: None,
            life_expectancy: None,
            average_weight: None,
            description: None,
            temperament: Vec::new(),
            care: Vec::new(),
            history: None,
            images: vec![self.default_image.clone()],
        }
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}

/// Name and score of the top prediction, falling back to the nearest
/// similar breed, then to "Unknown" with score 0
fn top_prediction(raw: &RawRecommendationResult) -> (&str, f64) {
    if let Some(prediction) = raw.predictions.first() {
        (prediction.breed.as_str(), prediction.score)
    } else if let Some(item) = raw.similar_breeds.first() {
        (item.breed.as_str(), item.similarity)
    } else {
        (UNKNOWN, 0.0)
    }
}

/// Human-readable text of an attribute value, `None` when absent
fn display_text(value: &AttributeValue) -> Option<String> {
    match value {
        AttributeValue::Number(n) => Some(n.to_string()),
        AttributeValue::Text(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}
