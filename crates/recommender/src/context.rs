//! # Model Context
//!
//! The read-only state every request runs against:
//! - breed entries with their scaled vectors
//! - the fitted feature codec (vocabulary + robust scaler)
//! - the group classifier and the similarity index
//!
//! `ModelContext::build` is the single initialization entry point. There is
//! no mutation path afterwards; share it with `Arc`.

use crate::error::{RecommendError, Result};
use catalog::{BreedCatalog, BreedRecord, RawAttributeRecord};
use features::{EncodedVector, FeatureCodec, FeatureError};
use neighbors::{GroupClassifier, IndexEntry, SimilarityIndex};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, info};

/// A catalog breed as the engine sees it
#[derive(Debug, Clone)]
pub struct BreedCatalogEntry {
    pub record: BreedRecord,
    pub group: String,
    /// Scaled vector, the one the neighbor structures are built on
    pub vector: EncodedVector,
    /// Position in the catalog file
    pub position: usize,
}

impl BreedCatalogEntry {
    pub fn name(&self) -> &str {
        &self.record.name
    }
}

#[derive(Debug)]
pub struct ModelContext {
    entries: Vec<BreedCatalogEntry>,
    codec: FeatureCodec,
    classifier: GroupClassifier,
    index: SimilarityIndex,
    groups: Vec<String>,
}

impl ModelContext {
    /// Fit the codec, encode every breed and build both neighbor structures
    ///
    /// Fails with `EmptyCatalog` on an empty catalog, or
    /// `InvalidCatalogEntry` naming the first breed that cannot be encoded.
    pub fn build(catalog: BreedCatalog) -> Result<Self> {
        let start = Instant::now();
        if catalog.is_empty() {
            return Err(RecommendError::EmptyCatalog);
        }

        let groups = catalog.groups();
        let records = catalog.into_breeds();

        let population: Vec<&RawAttributeRecord> = records.iter().map(|r| &r.attributes).collect();
        let codec = FeatureCodec::fit(&population).map_err(|e| population_error(&records, e))?;
        debug!("Fitted feature codec on {} breeds", records.len());

        // Breed vectors go through the same fitted scaler as user vectors
        let vectors = records
            .par_iter()
            .map(|record| {
                codec
                    .encode_scaled(&record.attributes)
                    .map_err(|source| RecommendError::InvalidCatalogEntry {
                        name: record.name.clone(),
                        source,
                    })
            })
            .collect::<Result<Vec<EncodedVector>>>()?;

        let entries: Vec<BreedCatalogEntry> = records
            .into_iter()
            .zip(vectors)
            .enumerate()
            .map(|(position, (record, vector))| BreedCatalogEntry {
                group: record.group(),
                record,
                vector,
                position,
            })
            .collect();

        let classifier = GroupClassifier::fit(
            entries.iter().map(|e| e.vector).collect(),
            entries.iter().map(|e| e.group.clone()).collect(),
        )?;
        let index = SimilarityIndex::build(
            entries
                .iter()
                .map(|e| IndexEntry::new(e.name(), e.vector).with_group(e.group.clone()))
                .collect(),
        )?;

        info!(
            "Built model context with {} breeds in {} groups in {:.2?}",
            entries.len(),
            groups.len(),
            start.elapsed()
        );
        Ok(Self {
            entries,
            codec,
            classifier,
            index,
            groups,
        })
    }

    pub fn entries(&self) -> &[BreedCatalogEntry] {
        &self.entries
    }

    pub fn codec(&self) -> &FeatureCodec {
        &self.codec
    }

    pub fn classifier(&self) -> &GroupClassifier {
        &self.classifier
    }

    pub fn index(&self) -> &SimilarityIndex {
        &self.index
    }

    /// Distinct breed groups, sorted
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Map a codec fit failure back to the breed that caused it
fn population_error(records: &[BreedRecord], error: FeatureError) -> RecommendError {
    match error {
        FeatureError::EmptyPopulation => RecommendError::EmptyCatalog,
        FeatureError::InvalidPopulationRecord { index, source } => {
            RecommendError::InvalidCatalogEntry {
                name: records
                    .get(index)
                    .map(|r| r.name.clone())
                    .unwrap_or_else(|| format!("#{}", index)),
                source: *source,
            }
        }
        other => RecommendError::InvalidCatalogEntry {
            name: String::from("<population>"),
            source: other,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::Attribute;

    fn breed(name: &str, size: &str, group: &str, exercise: f64) -> BreedRecord {
        BreedRecord::new(
            name,
            RawAttributeRecord::new()
                .with(Attribute::Size, size)
                .with(Attribute::ExerciseRequirements, exercise)
                .with(Attribute::GoodWithChildren, "Yes")
                .with(Attribute::IntelligenceRating, 7)
                .with(Attribute::TrainingDifficulty, 4)
                .with(Attribute::SheddingLevel, "Moderate")
                .with(Attribute::HealthIssuesRisk, "Low")
                .with(Attribute::Type, group)
                .with(Attribute::FriendlyRating, 8)
                .with(Attribute::LifeSpan, 12)
                .with(Attribute::AverageWeight, 20),
        )
    }

    #[test]
    fn test_build_keeps_catalog_order() {
        let catalog = BreedCatalog::from_records(vec![
            breed("Border Collie", "Medium", "Herding", 2.0),
            breed("Pug", "Small", "Toy", 0.5),
            breed("Mastiff", "Giant", "Working", 1.0),
        ])
        .unwrap();

        let context = ModelContext::build(catalog).unwrap();
        assert_eq!(context.len(), 3);
        assert_eq!(context.groups(), &["Herding", "Toy", "Working"]);
        let names: Vec<&str> = context.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["Border Collie", "Pug", "Mastiff"]);
        assert_eq!(context.entries()[2].position, 2);
        assert_eq!(context.index().len(), 3);
    }

    #[test]
    fn test_breed_vectors_use_fitted_scaler() {
        let catalog = BreedCatalog::from_records(vec![
            breed("Border Collie", "Medium", "Herding", 2.0),
            breed("Pug", "Small", "Toy", 0.5),
        ])
        .unwrap();
        let context = ModelContext::build(catalog).unwrap();

        let entry = &context.entries()[0];
        let expected = context.codec().encode_scaled(&entry.record.attributes).unwrap();
        assert_eq!(entry.vector, expected);
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let result = ModelContext::build(BreedCatalog::new());
        assert!(matches!(result, Err(RecommendError::EmptyCatalog)));
    }

    #[test]
    fn test_invalid_catalog_entry_is_named() {
        let mut bad = breed("Pug", "Small", "Toy", 0.5);
        bad.attributes.insert(Attribute::FriendlyRating, 40);
        let mut catalog = BreedCatalog::new();
        catalog.insert(breed("Beagle", "Small", "Hound", 1.0)).unwrap();
        catalog.insert(bad).unwrap();

        match ModelContext::build(catalog) {
            Err(RecommendError::InvalidCatalogEntry { name, source }) => {
                assert_eq!(name, "Pug");
                assert_eq!(source.field(), Some("Friendly Rating (1-10)"));
            }
            other => panic!("expected InvalidCatalogEntry, got {:?}", other),
        }
    }
}
