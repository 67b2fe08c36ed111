//! Integration tests for the presenter.
//!
//! Raw results come both from the real engine and hand-built degenerate
//! inputs; the catalog entries come from a real model context.

use catalog::{Attribute, BreedCatalog, BreedMetadata, BreedRecord, RawAttributeRecord};
use neighbors::{GroupPrediction, SimilarityItem};
use presenter::{Presenter, COMPATIBILITY_CAP, DEFAULT_IMAGE, FALLBACK_REASON};
use recommender::{
    ModelContext, PredictionItem, RawRecommendationResult, RecommendationEngine, UserProfileEcho,
};
use std::sync::Arc;

fn attributes(
    size: &str,
    exercise: f64,
    shedding: &str,
    group: &str,
    weight: f64,
) -> RawAttributeRecord {
    RawAttributeRecord::new()
        .with(Attribute::Size, size)
        .with(Attribute::ExerciseRequirements, exercise)
        .with(Attribute::GoodWithChildren, "Yes")
        .with(Attribute::IntelligenceRating, 7)
        .with(Attribute::TrainingDifficulty, 3)
        .with(Attribute::SheddingLevel, shedding)
        .with(Attribute::HealthIssuesRisk, "Low")
        .with(Attribute::Type, group)
        .with(Attribute::FriendlyRating, 8)
        .with(Attribute::LifeSpan, "12-15 years")
        .with(Attribute::AverageWeight, weight)
}

fn create_test_engine() -> RecommendationEngine {
    let catalog = BreedCatalog::from_records(vec![
        BreedRecord::new(
            "Australian Shepherd",
            attributes("Medium", 2.0, "Moderate", "Herding", 20.0),
        )
        .with_metadata(BreedMetadata {
            description: Some("Smart working dog".into()),
            temperament: vec!["Intelligent".into(), "Energetic".into()],
            images: vec!["/dog_breeds_img/australian shepherd.jpg".into()],
            ..Default::default()
        }),
        BreedRecord::new("Briard", attributes("Large", 1.5, "High", "Herding", 32.0)),
        BreedRecord::new("Maltese", attributes("Toy", 0.5, "Low", "Toy", 3.0)),
        BreedRecord::new("Boxer", attributes("Large", 2.0, "Moderate", "Working", 30.0)),
    ])
    .unwrap();
    RecommendationEngine::new(Arc::new(ModelContext::build(catalog).unwrap()))
}

fn profile(size_preference: f64) -> UserProfileEcho {
    UserProfileEcho {
        family_friendly: 1.9,
        energy_level: 1.5,
        maintenance_level: 0.55,
        intelligence_level: 7.0,
        size_preference,
    }
}

fn similarity(breed: &str, similarity: f64, group: Option<&str>) -> SimilarityItem {
    SimilarityItem {
        breed: breed.into(),
        similarity,
        rank: 0,
        group: group.map(str::to_string),
    }
}

#[test]
fn test_end_to_end_presentation() {
    let engine = create_test_engine();
    let prefs = attributes("Medium", 2.0, "Moderate", "Herding", 20.0);
    let raw = engine.recommend(&prefs, 4).unwrap();

    let result = Presenter::new().present(&raw, engine.context().entries());

    assert_eq!(result.breed.name, "Australian Shepherd");
    assert_eq!(result.breed.breed_group, "Herding");
    assert_eq!(result.breed.life_expectancy.as_deref(), Some("12-15 years"));
    assert_eq!(result.breed.good_with_children, Some(true));
    assert!(result.compatibility_score <= COMPATIBILITY_CAP);
    assert_eq!(
        result.match_reasons,
        vec![
            "Matches your preferred Medium size",
            "Great with families and children",
            "Energy level fits your lifestyle",
        ]
    );
    assert!(result
        .similar_breeds
        .iter()
        .all(|s| !s.breed.eq_ignore_ascii_case("australian shepherd")));
    assert_eq!(result.similar_breeds.len(), 3);
}

#[test]
fn test_present_is_idempotent() {
    let engine = create_test_engine();
    let prefs = attributes("Large", 1.0, "Low", "Working", 35.0);
    let raw = engine.recommend(&prefs, 3).unwrap();
    let presenter = Presenter::new();

    let first = presenter.present(&raw, engine.context().entries());
    let second = presenter.present(&raw, engine.context().entries());
    assert_eq!(first, second);
}

#[test]
fn test_empty_similarity_list_uses_best_similarity() {
    let engine = create_test_engine();
    let raw = RawRecommendationResult {
        predictions: vec![PredictionItem {
            breed: "Briard".into(),
            score: 0.734,
            rank: 1,
        }],
        similar_breeds: vec![],
        group_predictions: vec![],
        user_profile: profile(2.0),
    };

    let result = Presenter::new().present(&raw, engine.context().entries());
    assert_eq!(result.compatibility_score, 73);
    assert!(result.similar_breeds.is_empty());
}

#[test]
fn test_group_score_drives_compatibility() {
    let engine = create_test_engine();
    let raw = RawRecommendationResult {
        predictions: vec![PredictionItem {
            breed: "Boxer".into(),
            score: 0.4,
            rank: 1,
        }],
        similar_breeds: vec![similarity("Boxer", 0.9, Some("Working"))],
        group_predictions: vec![GroupPrediction {
            group: "Working".into(),
            score: 0.4,
            rank: 1,
        }],
        user_profile: profile(2.0),
    };

    let result = Presenter::new().present(&raw, engine.context().entries());
    assert_eq!(result.compatibility_score, 40);
}

#[test]
fn test_name_resolution_ignores_case_and_whitespace() {
    let engine = create_test_engine();
    let raw = RawRecommendationResult {
        predictions: vec![PredictionItem {
            breed: " australian shepherd ".into(),
            score: 0.9,
            rank: 1,
        }],
        similar_breeds: vec![
            similarity("Australian Shepherd", 0.9, Some("Herding")),
            similarity("Briard", 0.7, Some("Herding")),
        ],
        group_predictions: vec![],
        user_profile: profile(2.0),
    };

    let result = Presenter::new().present(&raw, engine.context().entries());
    assert_eq!(result.breed.name, "Australian Shepherd");
    assert_eq!(result.breed.temperament, vec!["Intelligent", "Energetic"]);
    assert_eq!(
        result.breed.images,
        vec!["/dog_breeds_img/australian shepherd.jpg"]
    );
    let similar: Vec<&str> = result.similar_breeds.iter().map(|s| s.breed.as_str()).collect();
    assert_eq!(similar, vec!["Briard"]);
}

#[test]
fn test_unresolved_breed_gets_placeholder() {
    let engine = create_test_engine();
    let raw = RawRecommendationResult {
        predictions: vec![PredictionItem {
            breed: "Xoloitzcuintli".into(),
            score: 0.5,
            rank: 1,
        }],
        similar_breeds: vec![],
        group_predictions: vec![],
        user_profile: profile(4.0),
    };

    let result = Presenter::new().present(&raw, engine.context().entries());
    assert_eq!(result.breed.name, "Xoloitzcuintli");
    assert_eq!(result.breed.size, "Medium");
    assert_eq!(result.breed.breed_group, "Unknown");
    assert_eq!(result.breed.images, vec![DEFAULT_IMAGE]);
}

#[test]
fn test_known_breed_without_image_gets_default() {
    let engine = create_test_engine();
    let breed = Presenter::new().resolve("maltese", engine.context().entries());
    assert_eq!(breed.name, "Maltese");
    assert_eq!(breed.size, "Small");
    assert_eq!(breed.images, vec![DEFAULT_IMAGE]);
}

#[test]
fn test_percentages_are_sanitized() {
    let raw = RawRecommendationResult {
        predictions: vec![
            PredictionItem {
                breed: "A".into(),
                score: f64::NAN,
                rank: 1,
            },
            PredictionItem {
                breed: "B".into(),
                score: 1.7,
                rank: 2,
            },
        ],
        similar_breeds: vec![similarity("C", -0.3, None), similarity("D", 0.456, None)],
        group_predictions: vec![],
        user_profile: profile(2.0),
    };

    let result = Presenter::new().present(&raw, &[]);
    assert_eq!(result.compatibility_score, 0);
    let scores: Vec<u8> = result.top_predictions.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![0, 100]);
    let similar: Vec<u8> = result.similar_breeds.iter().map(|s| s.similarity_score).collect();
    assert_eq!(similar, vec![0, 46]);
}

#[test]
fn test_reason_count_bounds() {
    let raw = RawRecommendationResult {
        predictions: vec![],
        similar_breeds: vec![],
        group_predictions: vec![],
        user_profile: UserProfileEcho {
            family_friendly: 0.0,
            energy_level: 0.0,
            maintenance_level: 5.0,
            intelligence_level: 1.0,
            size_preference: 4.0,
        },
    };

    let result = Presenter::new().present(&raw, &[]);
    assert_eq!(result.match_reasons, vec![FALLBACK_REASON]);
}

#[test]
fn test_response_uses_camel_case() {
    let engine = create_test_engine();
    let prefs = attributes("Medium", 2.0, "Moderate", "Herding", 20.0);
    let raw = engine.recommend(&prefs, 3).unwrap();
    let result = Presenter::new().present(&raw, engine.context().entries());

    let json = serde_json::to_value(&result).unwrap();
    assert!(json.get("compatibilityScore").is_some());
    assert!(json.get("matchReasons").is_some());
    assert!(json.get("topPredictions").is_some());
    assert!(json["similarBreeds"][0].get("similarityScore").is_some());
    assert!(json["breed"].get("breedGroup").is_some());
}
