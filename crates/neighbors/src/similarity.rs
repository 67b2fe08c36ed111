//! Similarity Index - unsupervised nearest breeds
//!
//! Holds every catalog vector in catalog order. Labels are carried along
//! for display only and never influence the search.

use crate::distance::cosine_distance;
use crate::error::{NeighborsError, Result};
use crate::types::SimilarityItem;
use features::EncodedVector;
use tracing::debug;

/// Number of similar breeds returned when the caller does not ask otherwise
pub const DEFAULT_TOP_K: usize = 5;

/// One indexed breed
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub name: String,
    pub group: Option<String>,
    pub vector: EncodedVector,
}

impl IndexEntry {
    pub fn new(name: impl Into<String>, vector: EncodedVector) -> Self {
        Self {
            name: name.into(),
            group: None,
            vector,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    entries: Vec<IndexEntry>,
}

impl SimilarityIndex {
    pub fn build(entries: Vec<IndexEntry>) -> Result<Self> {
        if entries.is_empty() {
            return Err(NeighborsError::EmptyPopulation);
        }
        debug!("Built similarity index over {} breeds", entries.len());
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `top_k` closest breeds, most similar first.
    ///
    /// Similarity is `1 - distance / 2` clamped to [0, 1]; ties keep catalog
    /// order. `top_k` is clamped to `[1, population]`.
    pub fn search_similar(&self, vector: &EncodedVector, top_k: usize) -> Vec<SimilarityItem> {
        let top_k = top_k.clamp(1, self.entries.len());

        let mut scored: Vec<(usize, f64)> = self
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let distance = cosine_distance(vector.as_slice(), entry.vector.as_slice());
                (idx, (1.0 - distance / 2.0).clamp(0.0, 1.0))
            })
            .collect();
        // sort_by is stable, so equal similarities stay in catalog order
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        scored
            .into_iter()
            .take(top_k)
            .enumerate()
            .map(|(rank, (idx, similarity))| {
                let entry = &self.entries[idx];
                SimilarityItem {
                    breed: entry.name.clone(),
                    similarity,
                    rank: rank + 1,
                    group: entry.group.clone(),
                }
            })
            .collect()
    }
}
