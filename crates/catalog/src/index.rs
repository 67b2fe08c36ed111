//! BreedCatalog building and lookup logic.
//!
//! The catalog keeps breeds in file order (insertion order is the stable
//! tie-break everywhere downstream) plus a name index for
//! case-insensitive, whitespace-trimmed lookups.

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::BreedRecord;
use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use tracing::info;

/// Normalize a breed name for lookups: trimmed and lowercased
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Ordered, read-only set of breed records.
#[derive(Debug, Clone, Default)]
pub struct BreedCatalog {
    breeds: Vec<BreedRecord>,
    /// Normalized name -> position in `breeds`
    by_name: HashMap<String, usize>,
}

impl BreedCatalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate a catalog file
    ///
    /// Steps:
    /// 1. Parse the JSON array of breed records
    /// 2. Insert them in file order (rejecting duplicate names)
    /// 3. Validate that every breed has all eleven attributes
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading breed catalog from {:?}", path);
        let records = parser::parse_catalog(path)?;
        let catalog = Self::from_records(records)?;
        info!(
            "Loaded {} breeds in {} groups",
            catalog.len(),
            catalog.groups().len()
        );
        Ok(catalog)
    }

    /// Build a validated catalog from already parsed records
    pub fn from_records(records: Vec<BreedRecord>) -> Result<Self> {
        let mut catalog = Self::new();
        for record in records {
            catalog.insert(record)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Insert a breed, keeping insertion order
    pub fn insert(&mut self, record: BreedRecord) -> Result<()> {
        let key = normalize_name(&record.name);
        if self.by_name.contains_key(&key) {
            return Err(CatalogError::DuplicateBreed { name: record.name });
        }
        self.by_name.insert(key, self.breeds.len());
        self.breeds.push(record);
        Ok(())
    }

    /// Check the catalog is non-empty and every record is complete
    pub fn validate(&self) -> Result<()> {
        if self.breeds.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        for breed in &self.breeds {
            breed.attributes.validate(&breed.name)?;
        }
        Ok(())
    }

    /// Case-insensitive, trimmed lookup
    pub fn find(&self, name: &str) -> Option<&BreedRecord> {
        self.position(name).map(|idx| &self.breeds[idx])
    }

    /// Catalog position of a breed
    pub fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(&normalize_name(name)).copied()
    }

    pub fn breeds(&self) -> &[BreedRecord] {
        &self.breeds
    }

    pub fn into_breeds(self) -> Vec<BreedRecord> {
        self.breeds
    }

    pub fn len(&self) -> usize {
        self.breeds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breeds.is_empty()
    }

    /// Distinct breed groups, sorted
    pub fn groups(&self) -> Vec<String> {
        self.breeds
            .iter()
            .map(|b| b.group())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
