//! Core trait for explanation rules.

use crate::types::ResolvedBreed;
use recommender::UserProfileEcho;

/// What a rule can look at: the user's profile and the recommended breed
#[derive(Debug, Clone, Copy)]
pub struct MatchContext<'a> {
    pub profile: &'a UserProfileEcho,
    pub breed: &'a ResolvedBreed,
}

/// A pure predicate that contributes at most one explanation string.
///
/// `Send + Sync` so a presenter can be shared across request threads.
pub trait MatchRule: Send + Sync {
    /// Name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// The explanation, if the rule fires
    fn evaluate(&self, context: &MatchContext<'_>) -> Option<String>;
}
