//! Score calibration.
//!
//! Raw engine scores are relative, not probabilities. Everything here turns
//! them into bounded integer percentages and never divides by zero or lets
//! a non-finite value through.

use neighbors::SimilarityItem;

/// Upper bound on the compatibility score
pub const COMPATIBILITY_CAP: u8 = 95;

/// Added to the mean similarity before dividing by it
pub const CALIBRATION_EPSILON: f64 = 1e-6;

/// How many leading similarity items feed the mean
const MEAN_WINDOW: usize = 5;

/// Fraction in [0, 1] to an integer percentage in [0, 100].
///
/// Non-finite input counts as 0.
pub fn to_percentage(fraction: f64) -> u8 {
    clamp_percent(fraction * 100.0)
}

/// Compatibility score for the top prediction.
///
/// With a group score for the top breed's group the score is that group
/// score. Otherwise the best similarity is compared to the mean of the first
/// five similarities (or used as is when that mean is not positive). The
/// result is clamped to [0, 100] and capped at `COMPATIBILITY_CAP`.
pub fn compatibility_score(
    group_score: Option<f64>,
    best_similarity: f64,
    similar: &[SimilarityItem],
) -> u8 {
    let raw = match group_score {
        Some(score) => score * 100.0,
        None => {
            let best = finite_or_zero(best_similarity);
            let mean = mean_top_similarity(similar);
            let adjusted = if mean > 0.0 {
                best / (mean + CALIBRATION_EPSILON)
            } else {
                best
            };
            adjusted * 100.0
        }
    };
    clamp_percent(raw).min(COMPATIBILITY_CAP)
}

/// Mean of the first `MEAN_WINDOW` similarities, 0 for an empty list
fn mean_top_similarity(similar: &[SimilarityItem]) -> f64 {
    let window: Vec<f64> = similar
        .iter()
        .take(MEAN_WINDOW)
        .map(|s| finite_or_zero(s.similarity))
        .collect();
    if window.is_empty() {
        return 0.0;
    }
    window.iter().sum::<f64>() / window.len() as f64
}

fn clamp_percent(value: f64) -> u8 {
    finite_or_zero(value).round().clamp(0.0, 100.0) as u8
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn similar(values: &[f64]) -> Vec<SimilarityItem> {
        values
            .iter()
            .enumerate()
            .map(|(idx, v)| SimilarityItem {
                breed: format!("Breed {}", idx),
                similarity: *v,
                rank: idx + 1,
                group: None,
            })
            .collect()
    }

    #[test]
    fn test_group_score_path() {
        assert_eq!(compatibility_score(Some(0.62), 0.9, &[]), 62);
        assert_eq!(compatibility_score(Some(1.0), 0.9, &[]), COMPATIBILITY_CAP);
    }

    #[test]
    fn test_empty_similarity_list_uses_best_similarity() {
        assert_eq!(compatibility_score(None, 0.734, &[]), 73);
        assert_eq!(compatibility_score(None, 0.99, &[]), 95);
    }

    #[test]
    fn test_relative_to_mean() {
        // mean of the first five is 0.8, 0.6 / 0.8 = 0.75
        let items = similar(&[0.9, 0.8, 0.8, 0.8, 0.7, 0.0]);
        assert_eq!(compatibility_score(None, 0.6, &items), 75);
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(compatibility_score(None, 0.0, &similar(&[0.0, 0.0])), 0);
        assert_eq!(compatibility_score(None, f64::NAN, &[]), 0);
        assert_eq!(compatibility_score(Some(f64::INFINITY), 0.5, &[]), 0);
        assert_eq!(compatibility_score(Some(-0.4), 0.5, &[]), 0);
        assert_eq!(compatibility_score(None, 0.5, &similar(&[f64::NAN])), 50);
    }

    #[test]
    fn test_to_percentage() {
        assert_eq!(to_percentage(0.456), 46);
        assert_eq!(to_percentage(1.7), 100);
        assert_eq!(to_percentage(-0.2), 0);
        assert_eq!(to_percentage(f64::NAN), 0);
    }
}
