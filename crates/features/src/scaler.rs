//! Robust scaling fitted on the breed population.
//!
//! Each column is centered on its median and divided by its interquartile
//! range, so a handful of extreme breeds cannot dominate distances. The
//! parameters are fitted once and reused for every user vector.

use crate::error::{FeatureError, Result};
use crate::vector::{EncodedVector, FEATURE_DIM};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RobustScaler {
    centers: [f32; FEATURE_DIM],
    scales: [f32; FEATURE_DIM],
}

impl RobustScaler {
    /// Fit medians and IQRs per column.
    ///
    /// A column with zero spread gets scale 1 so it is centered but not
    /// blown up.
    pub fn fit(population: &[EncodedVector]) -> Result<Self> {
        if population.is_empty() {
            return Err(FeatureError::EmptyPopulation);
        }

        let mut centers = [0.0; FEATURE_DIM];
        let mut scales = [1.0; FEATURE_DIM];

        for col in 0..FEATURE_DIM {
            let mut column: Vec<f64> = population
                .iter()
                .map(|v| v.as_slice()[col] as f64)
                .collect();
            column.sort_by(|a, b| a.total_cmp(b));

            let median = quantile(&column, 0.5);
            let iqr = quantile(&column, 0.75) - quantile(&column, 0.25);

            centers[col] = median as f32;
            scales[col] = if iqr.abs() < 10.0 * f64::EPSILON {
                1.0
            } else {
                iqr as f32
            };
        }

        Ok(Self { centers, scales })
    }

    /// Apply `(x - median) / iqr` per column
    pub fn transform(&self, vector: &EncodedVector) -> EncodedVector {
        let mut values = vector.values();
        for (col, value) in values.iter_mut().enumerate() {
            *value = (*value - self.centers[col]) / self.scales[col];
        }
        EncodedVector::from_values(values)
    }

    pub fn centers(&self) -> &[f32; FEATURE_DIM] {
        &self.centers
    }

    pub fn scales(&self) -> &[f32; FEATURE_DIM] {
        &self.scales
    }
}

/// Quantile of sorted data with linear interpolation between ranks
fn quantile(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let fraction = pos - lower as f64;
    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}
