//! Core domain types for breed records and user preferences.
//!
//! This module defines the attribute schema shared by the catalog file,
//! the preference payload and the feature codec:
//! - `Attribute` names the eleven canonical fields (and their wire names)
//! - `AttributeValue` is the closed Number | Text | Absent value type
//! - `RawAttributeRecord` maps attributes to values
//! - label enums (`SizeLabel`, `SheddingLevel`, `HealthRisk`) with total conversions

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

// =============================================================================
// Attribute schema
// =============================================================================

/// One of the eleven canonical attributes.
///
/// The wire names double as the request contract, so they are
/// case- and spacing-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Size,
    ExerciseRequirements,
    GoodWithChildren,
    IntelligenceRating,
    TrainingDifficulty,
    SheddingLevel,
    HealthIssuesRisk,
    Type,
    FriendlyRating,
    LifeSpan,
    AverageWeight,
}

/// Whether an attribute is label-encoded or passed through as a number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    Categorical,
    Numeric,
}

impl Attribute {
    /// All attributes in canonical (feature column) order
    pub const ALL: [Attribute; 11] = [
        Attribute::Size,
        Attribute::ExerciseRequirements,
        Attribute::GoodWithChildren,
        Attribute::IntelligenceRating,
        Attribute::TrainingDifficulty,
        Attribute::SheddingLevel,
        Attribute::HealthIssuesRisk,
        Attribute::Type,
        Attribute::FriendlyRating,
        Attribute::LifeSpan,
        Attribute::AverageWeight,
    ];

    /// Exact field name used in catalog files and preference payloads
    pub fn wire_name(self) -> &'static str {
        match self {
            Attribute::Size => "Size",
            Attribute::ExerciseRequirements => "Exercise Requirements (hrs/day)",
            Attribute::GoodWithChildren => "Good with Children",
            Attribute::IntelligenceRating => "Intelligence Rating (1-10)",
            Attribute::TrainingDifficulty => "Training Difficulty (1-10)",
            Attribute::SheddingLevel => "Shedding Level",
            Attribute::HealthIssuesRisk => "Health Issues Risk",
            Attribute::Type => "Type",
            Attribute::FriendlyRating => "Friendly Rating (1-10)",
            Attribute::LifeSpan => "Life Span",
            Attribute::AverageWeight => "Average Weight (kg)",
        }
    }

    /// Look up an attribute by its exact wire name
    pub fn from_wire_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|attr| attr.wire_name() == name)
    }

    pub fn kind(self) -> AttributeKind {
        match self {
            Attribute::Size
            | Attribute::GoodWithChildren
            | Attribute::SheddingLevel
            | Attribute::HealthIssuesRisk
            | Attribute::Type => AttributeKind::Categorical,
            _ => AttributeKind::Numeric,
        }
    }

    pub fn is_categorical(self) -> bool {
        self.kind() == AttributeKind::Categorical
    }

    /// Declared valid range (inclusive) for numeric attributes
    pub fn valid_range(self) -> Option<(f64, f64)> {
        match self {
            Attribute::ExerciseRequirements => Some((0.0, 24.0)),
            Attribute::IntelligenceRating
            | Attribute::TrainingDifficulty
            | Attribute::FriendlyRating => Some((1.0, 10.0)),
            Attribute::LifeSpan => Some((1.0, 30.0)),
            Attribute::AverageWeight => Some((0.5, 150.0)),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

// =============================================================================
// Attribute values
// =============================================================================

/// A raw attribute value as it arrives from a catalog file or a request.
///
/// JSON numbers become `Number`, strings become `Text`, and `null` becomes
/// `Absent`. A key that is not present at all also reads as `Absent`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Number(f64),
    Text(String),
    #[default]
    Absent,
}

static ABSENT: AttributeValue = AttributeValue::Absent;

impl AttributeValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, AttributeValue::Absent)
    }

    /// Text content, trimmed; `None` for numbers and absent values
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttributeValue::Text(s) => Some(s.trim()),
            _ => None,
        }
    }

    /// Numeric reading of the value.
    ///
    /// Text is accepted when it holds a number with an optional unit
    /// suffix ("20 kg", "12 years") or a range ("10-12" reads as 11).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            AttributeValue::Number(n) => Some(*n),
            AttributeValue::Text(s) => parse_numeric_text(s),
            AttributeValue::Absent => None,
        }
    }

    /// Normalized size label. Never fails; unrecognized input is `Unknown`.
    pub fn size_label(&self) -> SizeLabel {
        match self {
            AttributeValue::Text(s) => SizeLabel::from_label(s),
            AttributeValue::Number(n) => SizeLabel::from_score(*n),
            AttributeValue::Absent => SizeLabel::Unknown,
        }
    }

    pub fn shedding_level(&self) -> SheddingLevel {
        self.as_text()
            .map(SheddingLevel::from_label)
            .unwrap_or(SheddingLevel::Unknown)
    }

    pub fn health_risk(&self) -> HealthRisk {
        self.as_text()
            .map(HealthRisk::from_label)
            .unwrap_or(HealthRisk::Unknown)
    }

    /// Breed group label, or "Unknown" when empty or not text
    pub fn group_label(&self) -> String {
        match self.as_text() {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => UNKNOWN.to_string(),
        }
    }

    /// "Yes" / "No" as a flag; anything else (e.g. "With Training") is `None`
    pub fn children_flag(&self) -> Option<bool> {
        match self.as_text()?.to_lowercase().as_str() {
            "yes" => Some(true),
            "no" => Some(false),
            _ => None,
        }
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        AttributeValue::Number(value)
    }
}

impl From<i32> for AttributeValue {
    fn from(value: i32) -> Self {
        AttributeValue::Number(value as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Number(n) => write!(f, "{}", n),
            AttributeValue::Text(s) => write!(f, "{:?}", s),
            AttributeValue::Absent => f.write_str("null"),
        }
    }
}

/// Parse "12", "20 kg", "12 years" or "10-12".
///
/// The unit suffix starts at the first letter and must not carry digits, so
/// exponent forms like "1e3" are rejected instead of truncated.
fn parse_numeric_text(text: &str) -> Option<f64> {
    let split = text.find(char::is_alphabetic).unwrap_or(text.len());
    let (head, unit) = text.split_at(split);
    if unit.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    let head = head.trim();
    if head.is_empty() {
        return None;
    }
    if !head.starts_with('-')
        && let Some((low, high)) = head.split_once('-')
    {
        let low: f64 = low.trim().parse().ok()?;
        let high: f64 = high.trim().parse().ok()?;
        return Some((low + high) / 2.0);
    }
    head.parse().ok()
}

// =============================================================================
// Normalized labels
// =============================================================================

/// Fallback label for values that cannot be normalized
pub const UNKNOWN: &str = "Unknown";

/// Size bucket used for display and for matching user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    Small,
    Medium,
    Large,
    Giant,
    Unknown,
}

impl SizeLabel {
    /// Normalize a catalog size label ("Toy", "Small-Medium", ...)
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "toy" | "small" => SizeLabel::Small,
            "small-medium" | "medium" => SizeLabel::Medium,
            "large" => SizeLabel::Large,
            "giant" => SizeLabel::Giant,
            _ => SizeLabel::Unknown,
        }
    }

    /// Bucket a numeric size signal: <1.5 Small, <2.5 Medium, <3.5 Large, else Giant
    pub fn from_score(score: f64) -> Self {
        if !score.is_finite() {
            SizeLabel::Unknown
        } else if score < 1.5 {
            SizeLabel::Small
        } else if score < 2.5 {
            SizeLabel::Medium
        } else if score < 3.5 {
            SizeLabel::Large
        } else {
            SizeLabel::Giant
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SizeLabel::Small => "Small",
            SizeLabel::Medium => "Medium",
            SizeLabel::Large => "Large",
            SizeLabel::Giant => "Giant",
            SizeLabel::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SheddingLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Unknown,
}

impl SheddingLevel {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" | "minimal" => SheddingLevel::Low,
            "moderate" => SheddingLevel::Moderate,
            "high" => SheddingLevel::High,
            "very high" => SheddingLevel::VeryHigh,
            _ => SheddingLevel::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SheddingLevel::Low => "Low",
            SheddingLevel::Moderate => "Moderate",
            SheddingLevel::High => "High",
            SheddingLevel::VeryHigh => "Very High",
            SheddingLevel::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for SheddingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthRisk {
    Low,
    Moderate,
    High,
    Unknown,
}

impl HealthRisk {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "low" => HealthRisk::Low,
            "moderate" => HealthRisk::Moderate,
            "high" => HealthRisk::High,
            _ => HealthRisk::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HealthRisk::Low => "Low",
            HealthRisk::Moderate => "Moderate",
            HealthRisk::High => "High",
            HealthRisk::Unknown => UNKNOWN,
        }
    }
}

impl fmt::Display for HealthRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Records
// =============================================================================

/// A mapping from attribute wire names to raw values.
///
/// Represents either a breed's catalog attributes or a user's submitted
/// preferences. Unknown keys are kept but never read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawAttributeRecord {
    values: HashMap<String, AttributeValue>,
}

impl RawAttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, attribute: Attribute, value: impl Into<AttributeValue>) -> Self {
        self.insert(attribute, value);
        self
    }

    pub fn insert(&mut self, attribute: Attribute, value: impl Into<AttributeValue>) {
        self.values
            .insert(attribute.wire_name().to_string(), value.into());
    }

    pub fn remove(&mut self, attribute: Attribute) -> Option<AttributeValue> {
        self.values.remove(attribute.wire_name())
    }

    /// Value for an attribute; missing keys read as `Absent`
    pub fn get(&self, attribute: Attribute) -> &AttributeValue {
        self.values.get(attribute.wire_name()).unwrap_or(&ABSENT)
    }

    /// Attributes that are missing or null, in canonical order
    pub fn missing_fields(&self) -> Vec<Attribute> {
        Attribute::ALL
            .into_iter()
            .filter(|attr| self.get(*attr).is_absent())
            .collect()
    }

    /// Every record must supply all eleven attributes
    pub fn validate(&self, record: &str) -> Result<()> {
        match self.missing_fields().first() {
            Some(field) => Err(CatalogError::MissingField {
                record: record.to_string(),
                field: field.wire_name().to_string(),
            }),
            None => Ok(()),
        }
    }
}

/// Curated, display-only metadata. Any part may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreedMetadata {
    pub description: Option<String>,
    pub temperament: Vec<String>,
    pub care: Vec<String>,
    pub history: Option<String>,
    pub images: Vec<String>,
}

/// One row of the breed catalog file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreedRecord {
    pub name: String,
    pub attributes: RawAttributeRecord,
    #[serde(flatten)]
    pub metadata: BreedMetadata,
}

impl BreedRecord {
    pub fn new(name: impl Into<String>, attributes: RawAttributeRecord) -> Self {
        Self {
            name: name.into(),
            attributes,
            metadata: BreedMetadata::default(),
        }
    }

    pub fn with_metadata(mut self, metadata: BreedMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Breed group (the `Type` attribute)
    pub fn group(&self) -> String {
        self.attributes.get(Attribute::Type).group_label()
    }

    pub fn size(&self) -> SizeLabel {
        self.attributes.get(Attribute::Size).size_label()
    }
}
