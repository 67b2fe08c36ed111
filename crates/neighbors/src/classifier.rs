//! Group Classifier - distance-weighted k-nearest-neighbors
//!
//! Breed groups are the label space since there is only one sample per
//! breed. Given a scaled user vector:
//! 1. Compute the cosine distance to every training vector
//! 2. Keep the k nearest (ties by training order)
//! 3. Each neighbor votes for its group with weight 1/distance
//! 4. Normalize the votes so they sum to 1 and rank the groups
//!
//! When the query coincides with one or more training vectors, only those
//! exact matches vote.

use crate::distance::cosine_distance;
use crate::error::{NeighborsError, Result};
use crate::types::GroupPrediction;
use features::EncodedVector;
use std::collections::BTreeMap;
use tracing::debug;

/// Number of neighbors consulted when the caller does not configure one
pub const DEFAULT_GROUP_NEIGHBORS: usize = 3;

/// Distances below this count as an exact match
const ZERO_DISTANCE: f64 = 1e-10;

#[derive(Debug, Clone)]
pub struct GroupClassifier {
    vectors: Vec<EncodedVector>,
    labels: Vec<String>,
}

/// Accumulated vote for one group
#[derive(Debug)]
struct Vote {
    weight: f64,
    closest: f64,
}

impl GroupClassifier {
    /// Store the labeled training vectors
    pub fn fit(vectors: Vec<EncodedVector>, labels: Vec<String>) -> Result<Self> {
        if vectors.len() != labels.len() {
            return Err(NeighborsError::LengthMismatch {
                vectors: vectors.len(),
                labels: labels.len(),
            });
        }
        if vectors.is_empty() {
            return Err(NeighborsError::EmptyPopulation);
        }

        debug!("Fitted group classifier on {} vectors", vectors.len());
        Ok(Self { vectors, labels })
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Distinct group labels, sorted
    pub fn groups(&self) -> Vec<String> {
        let mut groups = self.labels.clone();
        groups.sort();
        groups.dedup();
        groups
    }

    /// Ranked group scores for a query vector.
    ///
    /// `k` is clamped to `[1, population]`, so small populations degrade to
    /// all-neighbors weighting instead of failing.
    pub fn classify_groups(&self, vector: &EncodedVector, k: usize) -> Vec<GroupPrediction> {
        let k = k.clamp(1, self.vectors.len());

        let mut distances: Vec<(f64, usize)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(idx, v)| (cosine_distance(vector.as_slice(), v.as_slice()), idx))
            .collect();
        distances.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        let nearest = &distances[..k];

        let exact = nearest.iter().any(|(d, _)| *d < ZERO_DISTANCE);
        let mut votes: BTreeMap<&str, Vote> = BTreeMap::new();
        for (distance, idx) in nearest {
            let weight = match (exact, *distance < ZERO_DISTANCE) {
                (true, true) => 1.0,
                (true, false) => continue,
                (false, _) => 1.0 / distance,
            };
            let vote = votes.entry(self.labels[*idx].as_str()).or_insert(Vote {
                weight: 0.0,
                closest: f64::INFINITY,
            });
            vote.weight += weight;
            vote.closest = vote.closest.min(*distance);
        }

        let total: f64 = votes.values().map(|v| v.weight).sum();
        let mut scored: Vec<(&str, f64, f64)> = votes
            .into_iter()
            .filter(|(_, v)| v.weight > 0.0)
            .map(|(label, v)| (label, v.weight / total, v.closest))
            .collect();

        // Label order is already ascending from the BTreeMap
        scored.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.2.total_cmp(&b.2)));

        scored
            .into_iter()
            .enumerate()
            .map(|(idx, (group, score, _))| GroupPrediction {
                group: group.to_string(),
                score,
                rank: idx + 1,
            })
            .collect()
    }
}
