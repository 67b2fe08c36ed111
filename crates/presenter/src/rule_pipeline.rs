//! The ExplanationPipeline evaluates match rules in a fixed order.

use crate::rules::{EnergyAlignmentRule, FamilyFriendlyRule, LowMaintenanceRule, SizeMatchRule};
use crate::traits::{MatchContext, MatchRule};
use tracing::debug;

/// Most explanation strings returned for one recommendation
pub const MAX_MATCH_REASONS: usize = 3;

/// Emitted when no rule fires
pub const FALLBACK_REASON: &str = "Good overall match for your preferences";

/// Ordered list of rules, each appending at most one string.
///
/// ## Usage
/// ```ignore
/// let pipeline = ExplanationPipeline::new()
///     .add_rule(SizeMatchRule)
///     .add_rule(FamilyFriendlyRule);
///
/// let reasons = pipeline.explain(&context);
/// ```
pub struct ExplanationPipeline {
    rules: Vec<Box<dyn MatchRule>>,
}

impl ExplanationPipeline {
    /// Create a new empty pipeline
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Size, family, energy, maintenance; in that order
    pub fn standard() -> Self {
        Self::new()
            .add_rule(SizeMatchRule)
            .add_rule(FamilyFriendlyRule)
            .add_rule(EnergyAlignmentRule)
            .add_rule(LowMaintenanceRule)
    }

    /// Add a rule to the end of the pipeline (builder pattern)
    pub fn add_rule(mut self, rule: impl MatchRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate rules in order, keep at most `MAX_MATCH_REASONS` strings,
    /// and fall back to a generic reason when nothing fired
    pub fn explain(&self, context: &MatchContext<'_>) -> Vec<String> {
        let mut reasons = Vec::with_capacity(MAX_MATCH_REASONS);
        for rule in &self.rules {
            if reasons.len() == MAX_MATCH_REASONS {
                break;
            }
            if let Some(reason) = rule.evaluate(context) {
                debug!("Rule fired: {}", rule.name());
                reasons.push(reason);
            }
        }

        if reasons.is_empty() {
            reasons.push(FALLBACK_REASON.to_string());
        }
        reasons
    }
}

impl Default for ExplanationPipeline {
    fn default() -> Self {
        Self::standard()
    }
}
