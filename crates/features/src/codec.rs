//! The feature codec: raw attribute records to encoded vectors.
//!
//! Encoding happens in three steps:
//! 1. Base columns: categorical attributes are label-encoded with the fitted
//!    vocabulary, numeric attributes are range-checked and passed through
//! 2. Derived columns are computed from the base attributes
//! 3. (`encode_scaled` only) the fitted robust scaler is applied

use crate::error::{FeatureError, Result};
use crate::scaler::RobustScaler;
use crate::vector::{EncodedVector, Feature, FEATURE_DIM};
use crate::vocabulary::CategoryVocabulary;
use catalog::{Attribute, AttributeValue, RawAttributeRecord};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

/// Label encoding + derived features + robust scaling, fitted once.
#[derive(Debug, Clone)]
pub struct FeatureCodec {
    vocabulary: CategoryVocabulary,
    scaler: RobustScaler,
}

impl FeatureCodec {
    /// Fit the vocabulary and the scaler on the breed population.
    ///
    /// The population is encoded in parallel; every record must encode
    /// cleanly or the whole fit fails.
    pub fn fit(population: &[&RawAttributeRecord]) -> Result<Self> {
        if population.is_empty() {
            return Err(FeatureError::EmptyPopulation);
        }

        let vocabulary = CategoryVocabulary::fit(population.iter().copied());
        let encoded = population
            .par_iter()
            .enumerate()
            .map(|(index, record)| {
                encode_with(&vocabulary, record).map_err(|e| {
                    FeatureError::InvalidPopulationRecord {
                        index,
                        source: Box::new(e),
                    }
                })
            })
            .collect::<Result<Vec<EncodedVector>>>()?;
        let scaler = RobustScaler::fit(&encoded)?;

        debug!(
            "Fitted feature codec on {} records ({} columns)",
            encoded.len(),
            FEATURE_DIM
        );
        Ok(Self { vocabulary, scaler })
    }

    /// Unscaled vector: 11 base columns followed by the 5 derived features
    pub fn encode(&self, record: &RawAttributeRecord) -> Result<EncodedVector> {
        encode_with(&self.vocabulary, record)
    }

    /// Apply the fitted scaler to an already encoded vector
    pub fn scale(&self, vector: &EncodedVector) -> EncodedVector {
        self.scaler.transform(vector)
    }

    pub fn encode_scaled(&self, record: &RawAttributeRecord) -> Result<EncodedVector> {
        Ok(self.scale(&self.encode(record)?))
    }

    pub fn vocabulary(&self) -> &CategoryVocabulary {
        &self.vocabulary
    }

    pub fn scaler(&self) -> &RobustScaler {
        &self.scaler
    }

    /// Describe columns, vocabularies and numeric ranges
    pub fn feature_info(&self) -> FeatureInfo {
        FeatureInfo {
            feature_columns: Feature::all().map(|f| f.name().to_string()).collect(),
            categorical_columns: Attribute::ALL
                .into_iter()
                .filter(|a| a.is_categorical())
                .map(|a| a.wire_name().to_string())
                .collect(),
            numeric_columns: Attribute::ALL
                .into_iter()
                .filter_map(|a| {
                    a.valid_range().map(|(min, max)| NumericColumn {
                        name: a.wire_name().to_string(),
                        min,
                        max,
                    })
                })
                .collect(),
            categorical_values: self.vocabulary.to_wire_map(),
        }
    }
}

/// Column metadata exposed to callers
#[derive(Debug, Clone, Serialize)]
pub struct FeatureInfo {
    pub feature_columns: Vec<String>,
    pub categorical_columns: Vec<String>,
    pub numeric_columns: Vec<NumericColumn>,
    pub categorical_values: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NumericColumn {
    pub name: String,
    pub min: f64,
    pub max: f64,
}

fn encode_with(
    vocabulary: &CategoryVocabulary,
    record: &RawAttributeRecord,
) -> Result<EncodedVector> {
    let mut values = [0.0f32; FEATURE_DIM];

    for attr in Attribute::ALL {
        let encoded = if attr.is_categorical() {
            vocabulary.encode(attr, record.get(attr))? as f64
        } else {
            numeric_value(attr, record.get(attr))?
        };
        values[Feature::Base(attr).index()] = encoded as f32;
    }

    // Derived features read the raw labels and numbers, not the label codes
    let label = |attr: Attribute| record.get(attr).as_text().unwrap_or_default();
    let number = |attr: Attribute| values[Feature::Base(attr).index()] as f64;

    let children = children_weight(label(Attribute::GoodWithChildren));
    let shedding = shedding_weight(label(Attribute::SheddingLevel));
    let health = health_weight(label(Attribute::HealthIssuesRisk));
    let exercise = number(Attribute::ExerciseRequirements);
    let intelligence = number(Attribute::IntelligenceRating);
    let training = number(Attribute::TrainingDifficulty);
    let friendly = number(Attribute::FriendlyRating);

    let derived = [
        (
            Feature::FamilyCompatibilityScore,
            children * 0.4 + friendly * 0.1 + (10.0 - training) * 0.1,
        ),
        (
            Feature::MaintenanceScore,
            shedding * 0.3 + exercise * 0.2 + health * 0.3,
        ),
        (Feature::EnergyScore, exercise * 0.4 + intelligence * 0.1),
        (
            Feature::IntelligenceTrainingRatio,
            intelligence / (training + 1.0),
        ),
        (Feature::SizeScore, size_weight(label(Attribute::Size))),
    ];
    for (feature, value) in derived {
        values[feature.index()] = value as f32;
    }

    Ok(EncodedVector::from_values(values))
}

/// Range-checked numeric reading of an attribute
fn numeric_value(attribute: Attribute, value: &AttributeValue) -> Result<f64> {
    let field = attribute.wire_name().to_string();
    let number = match value {
        AttributeValue::Absent => return Err(FeatureError::MissingField { field }),
        other => other.as_number().ok_or_else(|| FeatureError::WrongType {
            field: field.clone(),
            value: other.to_string(),
        })?,
    };

    if let Some((min, max)) = attribute.valid_range()
        && !(min..=max).contains(&number)
    {
        return Err(FeatureError::OutOfRange {
            field,
            value: number,
            min,
            max,
        });
    }
    Ok(number)
}

fn children_weight(label: &str) -> f64 {
    match label.to_lowercase().as_str() {
        "yes" => 1.0,
        "with training" => 0.5,
        _ => 0.0,
    }
}

fn shedding_weight(label: &str) -> f64 {
    match label.to_lowercase().as_str() {
        "low" => 0.0,
        "moderate" => 0.5,
        "high" => 1.0,
        "very high" => 1.5,
        _ => 0.5,
    }
}

fn health_weight(label: &str) -> f64 {
    match label.to_lowercase().as_str() {
        "low" => 0.0,
        "moderate" => 0.5,
        "high" => 1.0,
        _ => 0.5,
    }
}

fn size_weight(label: &str) -> f64 {
    match label.to_lowercase().as_str() {
        "toy" | "small" => 1.0,
        "small-medium" => 1.5,
        "medium" => 2.0,
        "large" => 3.0,
        "giant" => 4.0,
        _ => 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        size: &str,
        exercise: f64,
        children: &str,
        training: i32,
        shedding: &str,
        group: &str,
    ) -> RawAttributeRecord {
        RawAttributeRecord::new()
            .with(Attribute::Size, size)
            .with(Attribute::ExerciseRequirements, exercise)
            .with(Attribute::GoodWithChildren, children)
            .with(Attribute::IntelligenceRating, 7)
            .with(Attribute::TrainingDifficulty, training)
            .with(Attribute::SheddingLevel, shedding)
            .with(Attribute::HealthIssuesRisk, "Low")
            .with(Attribute::Type, group)
            .with(Attribute::FriendlyRating, 8)
            .with(Attribute::LifeSpan, 12)
            .with(Attribute::AverageWeight, 20)
    }

    fn population() -> Vec<RawAttributeRecord> {
        vec![
            record("Medium", 2.0, "Yes", 3, "Moderate", "Herding"),
            record("Large", 1.0, "With Training", 6, "High", "Working"),
            record("Small", 0.5, "No", 8, "Low", "Toy"),
            record("Giant", 1.5, "Yes", 5, "Very High", "Working"),
        ]
    }

    fn codec() -> FeatureCodec {
        let records = population();
        let refs: Vec<&RawAttributeRecord> = records.iter().collect();
        FeatureCodec::fit(&refs).unwrap()
    }

    #[test]
    fn test_encode_dimension_and_determinism() {
        let codec = codec();
        let prefs = record("Medium", 2.0, "Yes", 3, "Moderate", "Herding");

        let first = codec.encode(&prefs).unwrap();
        let second = codec.encode(&prefs).unwrap();
        assert_eq!(first.as_slice().len(), FEATURE_DIM);
        let bits = |v: &EncodedVector| v.as_slice().iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&first), bits(&second));

        let scaled_first = codec.encode_scaled(&prefs).unwrap();
        let scaled_second = codec.encode_scaled(&prefs).unwrap();
        assert_eq!(bits(&scaled_first), bits(&scaled_second));
    }

    #[test]
    fn test_derived_features() {
        let codec = codec();
        let v = codec
            .encode(&record("Medium", 2.0, "Yes", 3, "Moderate", "Herding"))
            .unwrap();

        // 1.0*0.4 + 8*0.1 + (10-3)*0.1
        assert!((v.get(Feature::FamilyCompatibilityScore) - 1.9).abs() < 1e-6);
        // 0.5*0.3 + 2.0*0.2 + 0.0*0.3
        assert!((v.get(Feature::MaintenanceScore) - 0.55).abs() < 1e-6);
        // 2.0*0.4 + 7*0.1
        assert!((v.get(Feature::EnergyScore) - 1.5).abs() < 1e-6);
        // 7 / (3 + 1)
        assert!((v.get(Feature::IntelligenceTrainingRatio) - 1.75).abs() < 1e-6);
        assert_eq!(v.get(Feature::SizeScore), 2.0);
    }

    #[test]
    fn test_base_columns() {
        let codec = codec();
        let v = codec
            .encode(&record("Medium", 2.0, "Yes", 3, "Moderate", "Herding"))
            .unwrap();

        // Type classes: Herding, Toy, Working
        assert_eq!(v.get(Feature::Base(Attribute::Type)), 0.0);
        // Size classes: Giant, Large, Medium, Small
        assert_eq!(v.get(Feature::Base(Attribute::Size)), 2.0);
        assert_eq!(v.get(Feature::Base(Attribute::ExerciseRequirements)), 2.0);
        assert_eq!(v.get(Feature::Base(Attribute::AverageWeight)), 20.0);
    }

    #[test]
    fn test_out_of_range_names_field() {
        let codec = codec();
        let prefs = record("Medium", 2.0, "Yes", 15, "Moderate", "Herding");

        let err = codec.encode(&prefs).unwrap_err();
        assert_eq!(err.field(), Some("Training Difficulty (1-10)"));
        assert!(matches!(err, FeatureError::OutOfRange { value, .. } if value == 15.0));
    }

    #[test]
    fn test_unknown_category() {
        let codec = codec();
        let prefs = record("Medium", 2.0, "Yes", 3, "Moderate", "Sporting");
        let err = codec.encode(&prefs).unwrap_err();
        assert!(matches!(err, FeatureError::UnknownCategory { .. }));
        assert_eq!(err.field(), Some("Type"));
    }

    #[test]
    fn test_missing_and_wrong_type() {
        let codec = codec();

        let mut prefs = record("Medium", 2.0, "Yes", 3, "Moderate", "Herding");
        prefs.remove(Attribute::LifeSpan);
        assert!(matches!(
            codec.encode(&prefs),
            Err(FeatureError::MissingField { ref field }) if field == "Life Span"
        ));

        let prefs = record("Medium", 2.0, "Yes", 3, "Moderate", "Herding")
            .with(Attribute::AverageWeight, "heavy");
        assert!(matches!(codec.encode(&prefs), Err(FeatureError::WrongType { .. })));
    }

    #[test]
    fn test_numeric_text_accepted() {
        let codec = codec();
        let prefs = record("Medium", 2.0, "Yes", 3, "Moderate", "Herding")
            .with(Attribute::AverageWeight, "20 kg")
            .with(Attribute::LifeSpan, "10-14");
        let v = codec.encode(&prefs).unwrap();
        assert_eq!(v.get(Feature::Base(Attribute::AverageWeight)), 20.0);
        assert_eq!(v.get(Feature::Base(Attribute::LifeSpan)), 12.0);
    }

    #[test]
    fn test_fit_rejects_bad_population_record() {
        let mut records = population();
        records[2] = records[2].clone().with(Attribute::IntelligenceRating, 42);
        let refs: Vec<&RawAttributeRecord> = records.iter().collect();

        let err = FeatureCodec::fit(&refs).unwrap_err();
        assert!(matches!(err, FeatureError::InvalidPopulationRecord { index: 2, .. }));
        assert_eq!(err.field(), Some("Intelligence Rating (1-10)"));
    }

    #[test]
    fn test_fit_rejects_empty_population() {
        assert!(matches!(FeatureCodec::fit(&[]), Err(FeatureError::EmptyPopulation)));
    }

    #[test]
    fn test_feature_info() {
        let info = codec().feature_info();
        assert_eq!(info.feature_columns.len(), FEATURE_DIM);
        assert_eq!(info.categorical_columns.len(), 5);
        assert_eq!(info.numeric_columns.len(), 6);
        assert_eq!(
            info.categorical_values["Type"],
            vec!["Herding".to_string(), "Toy".to_string(), "Working".to_string()]
        );
    }
}
