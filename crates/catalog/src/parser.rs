//! Parsers for breed catalog files and preference payloads.
//!
//! Both formats are JSON:
//! - catalog: an array of `BreedRecord` objects
//!   (`{"name": ..., "attributes": {...}, "description": ..., "images": [...]}`)
//! - preferences: a single object keyed by attribute wire names

use crate::error::{CatalogError, Result};
use crate::types::{BreedRecord, RawAttributeRecord};
use std::fs;
use std::path::Path;

/// Read a whole file, mapping a missing path to `FileNotFound`
fn read_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(fs::read_to_string(path)?)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Parse a catalog file from disk
pub fn parse_catalog(path: &Path) -> Result<Vec<BreedRecord>> {
    let content = read_file(path)?;
    parse_catalog_str(&file_label(path), &content)
}

/// Parse catalog JSON. Names are trimmed; an empty name is a parse error.
pub fn parse_catalog_str(file: &str, content: &str) -> Result<Vec<BreedRecord>> {
    let mut records: Vec<BreedRecord> =
        serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
            file: file.to_string(),
            reason: e.to_string(),
        })?;

    for (idx, record) in records.iter_mut().enumerate() {
        record.name = record.name.trim().to_string();
        if record.name.is_empty() {
            return Err(CatalogError::ParseError {
                file: file.to_string(),
                reason: format!("Record {} has an empty name", idx + 1),
            });
        }
    }

    Ok(records)
}

/// Parse a preferences file from disk
pub fn parse_preferences(path: &Path) -> Result<RawAttributeRecord> {
    let content = read_file(path)?;
    parse_preferences_str(&file_label(path), &content)
}

/// Parse preference JSON.
///
/// Only the JSON shape is checked here; presence, types and ranges of the
/// individual fields are checked by the feature codec so that the caller
/// gets one error naming the offending field.
pub fn parse_preferences_str(file: &str, content: &str) -> Result<RawAttributeRecord> {
    serde_json::from_str(content).map_err(|e| CatalogError::ParseError {
        file: file.to_string(),
        reason: e.to_string(),
    })
}
