//! Error types for building the neighbor structures.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NeighborsError {
    #[error("Cannot build a neighbor structure over an empty population")]
    EmptyPopulation,

    #[error("Got {vectors} vectors but {labels} labels")]
    LengthMismatch { vectors: usize, labels: usize },
}

pub type Result<T> = std::result::Result<T, NeighborsError>;
