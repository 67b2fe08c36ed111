//! # Catalog Crate
//!
//! This crate owns the attribute schema and the breed catalog.
//!
//! ## Main Components
//!
//! - **types**: `Attribute`, the `AttributeValue` tagged union, raw records,
//!   breed records and normalized labels
//! - **parser**: JSON parsing for catalog files and preference payloads
//! - **index**: `BreedCatalog` with ordered storage and name lookups
//! - **error**: Error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::BreedCatalog;
//! use std::path::Path;
//!
//! let catalog = BreedCatalog::load_from_file(Path::new("data/breeds.json"))?;
//! let breed = catalog.find(" border collie ").unwrap();
//! println!("{} is a {} dog", breed.name, breed.group());
//! ```

pub mod error;
pub mod types;
pub mod parser;
pub mod index;

pub use error::{CatalogError, Result};
pub use index::{normalize_name, BreedCatalog};
pub use types::{
    Attribute,
    AttributeKind,
    AttributeValue,
    BreedMetadata,
    BreedRecord,
    HealthRisk,
    RawAttributeRecord,
    SheddingLevel,
    SizeLabel,
    UNKNOWN,
};
