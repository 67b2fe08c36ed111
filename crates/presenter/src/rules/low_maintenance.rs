//! Rule: a low-maintenance profile paired with a light-shedding breed.

use crate::traits::{MatchContext, MatchRule};
use catalog::SheddingLevel;

/// Highest maintenance score that still counts as low maintenance
const LOW_MAINTENANCE: f64 = 1.5;

pub struct LowMaintenanceRule;

impl MatchRule for LowMaintenanceRule {
    fn name(&self) -> &str {
        "LowMaintenanceRule"
    }

    fn evaluate(&self, context: &MatchContext<'_>) -> Option<String> {
        let light_shedding =
            SheddingLevel::from_label(&context.breed.shedding) == SheddingLevel::Low;

        (context.profile.maintenance_level <= LOW_MAINTENANCE && light_shedding)
            .then(|| "Low maintenance and light shedding".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::fixtures::{breed, fires, profile};

    #[test]
    fn test_low_maintenance() {
        let mut profile = profile();
        profile.maintenance_level = 1.2;
        let low = breed("Medium", "Low", None);
        let high = breed("Medium", "High", None);

        assert!(fires(&LowMaintenanceRule, &profile, &low));
        assert!(!fires(&LowMaintenanceRule, &profile, &high));

        profile.maintenance_level = 1.6;
        assert!(!fires(&LowMaintenanceRule, &profile, &low));
    }
}
