//! Rule: the breed has the size the user asked for.
//!
//! The user's size preference is a numeric score, bucketed the same way a
//! numeric size attribute is: <1.5 Small, <2.5 Medium, <3.5 Large, else
//! Giant.

use crate::traits::{MatchContext, MatchRule};
use catalog::SizeLabel;

pub struct SizeMatchRule;

impl MatchRule for SizeMatchRule {
    fn name(&self) -> &str {
        "SizeMatchRule"
    }

    fn evaluate(&self, context: &MatchContext<'_>) -> Option<String> {
        let preferred = SizeLabel::from_score(context.profile.size_preference);
        let breed_size = SizeLabel::from_label(&context.breed.size);

        (preferred != SizeLabel::Unknown && preferred == breed_size)
            .then(|| format!("Matches your preferred {} size", preferred.as_str()))
    }
}
