//! Error types for feature encoding and scaler fitting.

use thiserror::Error;

/// Errors raised while encoding a record or fitting on a population
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeatureError {
    #[error("Missing required field '{field}'")]
    MissingField { field: String },

    #[error("Field '{field}' has the wrong type: {value}")]
    WrongType { field: String, value: String },

    #[error("Invalid value for '{field}': {value}. Accepted values: {allowed:?}")]
    UnknownCategory {
        field: String,
        value: String,
        allowed: Vec<String>,
    },

    #[error("Value {value} for '{field}' is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("Cannot fit on an empty population")]
    EmptyPopulation,

    #[error("Population record {index} is invalid: {source}")]
    InvalidPopulationRecord {
        index: usize,
        source: Box<FeatureError>,
    },
}

impl FeatureError {
    /// Wire name of the offending field, if the error is about one
    pub fn field(&self) -> Option<&str> {
        match self {
            FeatureError::MissingField { field }
            | FeatureError::WrongType { field, .. }
            | FeatureError::UnknownCategory { field, .. }
            | FeatureError::OutOfRange { field, .. } => Some(field),
            FeatureError::InvalidPopulationRecord { source, .. } => source.field(),
            FeatureError::EmptyPopulation => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FeatureError>;
