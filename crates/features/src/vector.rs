//! Feature columns and the fixed-size encoded vector.

use catalog::Attribute;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of base (per-attribute) columns
pub const BASE_DIM: usize = 11;

/// Total vector dimension: 11 base columns + 5 derived features
pub const FEATURE_DIM: usize = 16;

/// One column of the encoded vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    Base(Attribute),
    FamilyCompatibilityScore,
    MaintenanceScore,
    EnergyScore,
    IntelligenceTrainingRatio,
    SizeScore,
}

impl Feature {
    pub const DERIVED: [Feature; 5] = [
        Feature::FamilyCompatibilityScore,
        Feature::MaintenanceScore,
        Feature::EnergyScore,
        Feature::IntelligenceTrainingRatio,
        Feature::SizeScore,
    ];

    /// All columns in vector order
    pub fn all() -> impl Iterator<Item = Feature> {
        Attribute::ALL
            .into_iter()
            .map(Feature::Base)
            .chain(Self::DERIVED)
    }

    /// Position of this column in the vector
    pub fn index(self) -> usize {
        match self {
            Feature::Base(attr) => base_index(attr),
            Feature::FamilyCompatibilityScore => BASE_DIM,
            Feature::MaintenanceScore => BASE_DIM + 1,
            Feature::EnergyScore => BASE_DIM + 2,
            Feature::IntelligenceTrainingRatio => BASE_DIM + 3,
            Feature::SizeScore => BASE_DIM + 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::Base(attr) => attr.wire_name(),
            Feature::FamilyCompatibilityScore => "Family_Compatibility_Score",
            Feature::MaintenanceScore => "Maintenance_Score",
            Feature::EnergyScore => "Energy_Score",
            Feature::IntelligenceTrainingRatio => "Intelligence_Training_Ratio",
            Feature::SizeScore => "Size_Score",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn base_index(attribute: Attribute) -> usize {
    match attribute {
        Attribute::Size => 0,
        Attribute::ExerciseRequirements => 1,
        Attribute::GoodWithChildren => 2,
        Attribute::IntelligenceRating => 3,
        Attribute::TrainingDifficulty => 4,
        Attribute::SheddingLevel => 5,
        Attribute::HealthIssuesRisk => 6,
        Attribute::Type => 7,
        Attribute::FriendlyRating => 8,
        Attribute::LifeSpan => 9,
        Attribute::AverageWeight => 10,
    }
}

/// Fixed-length feature vector.
///
/// Breed vectors and user vectors share the same column order, which is
/// what makes distances between them meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EncodedVector([f32; FEATURE_DIM]);

impl EncodedVector {
    pub fn from_values(values: [f32; FEATURE_DIM]) -> Self {
        Self(values)
    }

    pub fn zeros() -> Self {
        Self([0.0; FEATURE_DIM])
    }

    pub fn get(&self, feature: Feature) -> f32 {
        self.0[feature.index()]
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.0
    }

    pub fn values(&self) -> [f32; FEATURE_DIM] {
        self.0
    }

    pub fn dim(&self) -> usize {
        FEATURE_DIM
    }
}
