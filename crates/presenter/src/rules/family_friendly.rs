//! Rule: the user's profile scores high on family compatibility.

use crate::traits::{MatchContext, MatchRule};

/// Minimum family-friendly score for the rule to fire
const FAMILY_THRESHOLD: f64 = 0.6;

pub struct FamilyFriendlyRule;

impl MatchRule for FamilyFriendlyRule {
    fn name(&self) -> &str {
        "FamilyFriendlyRule"
    }

    fn evaluate(&self, context: &MatchContext<'_>) -> Option<String> {
        (context.profile.family_friendly >= FAMILY_THRESHOLD)
            .then(|| "Great with families and children".to_string())
    }
}
