//! Rule: the breed's exercise needs line up with the user's energy level.
//!
//! High energy (>= 1.5) wants a breed needing at least 2 hours a day; low
//! energy wants one needing at most 1.5. A breed without a known exercise
//! need never matches.

use crate::traits::{MatchContext, MatchRule};

const HIGH_ENERGY: f64 = 1.5;
const ACTIVE_BREED_HOURS: f64 = 2.0;
const CALM_BREED_HOURS: f64 = 1.5;

pub struct EnergyAlignmentRule;

impl MatchRule for EnergyAlignmentRule {
    fn name(&self) -> &str {
        "EnergyAlignmentRule"
    }

    fn evaluate(&self, context: &MatchContext<'_>) -> Option<String> {
        let hours = context.breed.exercise_needs.filter(|h| h.is_finite())?;
        let energy = context.profile.energy_level;

        let aligned = if energy >= HIGH_ENERGY {
            hours >= ACTIVE_BREED_HOURS
        } else {
            hours <= CALM_BREED_HOURS
        };
        aligned.then(|| "Energy level fits your lifestyle".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{breed, profile};

    fn fires(energy: f64, hours: Option<f64>) -> bool {
        let mut profile = profile();
        profile.energy_level = energy;
        let breed = breed("Medium", "Low", hours);
        EnergyAlignmentRule
            .evaluate(&MatchContext { profile: &profile, breed: &breed })
            .is_some()
    }

    #[test]
    fn test_energy_alignment() {
        assert!(fires(1.5, Some(2.0)));
        assert!(!fires(1.5, Some(1.8)));
        assert!(fires(1.0, Some(1.5)));
        assert!(!fires(1.0, Some(2.0)));
        assert!(!fires(2.0, None));
    }
}
