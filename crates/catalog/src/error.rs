//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating breed records
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// File content couldn't be parsed
    #[error("Parse error in {file}: {reason}")]
    ParseError { file: String, reason: String },

    /// A record is missing one of the eleven canonical attributes
    #[error("Missing value for '{field}' in {record}")]
    MissingField { record: String, field: String },

    /// Two catalog rows resolve to the same breed name
    #[error("Duplicate breed: {name}")]
    DuplicateBreed { name: String },

    /// The catalog has no breeds at all
    #[error("Catalog contains no breeds")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
