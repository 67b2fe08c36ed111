//! Per-field vocabulary for categorical attributes.
//!
//! Works like a label encoder: the classes seen in the breed population are
//! sorted and each class is encoded as its position. The vocabulary is fixed
//! once fitted; values outside it are rejected, never coerced.

use crate::error::{FeatureError, Result};
use catalog::{Attribute, AttributeValue, RawAttributeRecord};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryVocabulary {
    /// Sorted classes per categorical attribute
    classes: BTreeMap<Attribute, Vec<String>>,
}

impl CategoryVocabulary {
    /// Collect the classes of every categorical attribute.
    ///
    /// Values are trimmed and deduplicated case-insensitively; the first
    /// spelling seen is kept as the canonical one.
    pub fn fit<'a>(records: impl IntoIterator<Item = &'a RawAttributeRecord>) -> Self {
        let mut seen: BTreeMap<Attribute, BTreeMap<String, String>> = BTreeMap::new();

        for record in records {
            for attr in Attribute::ALL.into_iter().filter(|a| a.is_categorical()) {
                if let Some(text) = record.get(attr).as_text()
                    && !text.is_empty()
                {
                    seen.entry(attr)
                        .or_default()
                        .entry(text.to_lowercase())
                        .or_insert_with(|| text.to_string());
                }
            }
        }

        let classes = seen
            .into_iter()
            .map(|(attr, labels)| (attr, labels.into_values().collect()))
            .collect();
        Self { classes }
    }

    /// Known classes for an attribute, in encoding order
    pub fn classes(&self, attribute: Attribute) -> &[String] {
        self.classes
            .get(&attribute)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Encode a categorical value as its class index
    pub fn encode(&self, attribute: Attribute, value: &AttributeValue) -> Result<usize> {
        let field = attribute.wire_name().to_string();
        let text = match value {
            AttributeValue::Text(s) => s.trim(),
            AttributeValue::Absent => return Err(FeatureError::MissingField { field }),
            other => {
                return Err(FeatureError::WrongType {
                    field,
                    value: other.to_string(),
                });
            }
        };

        let classes = self.classes(attribute);
        classes
            .iter()
            .position(|class| class.eq_ignore_ascii_case(text))
            .ok_or_else(|| FeatureError::UnknownCategory {
                field,
                value: text.to_string(),
                allowed: classes.to_vec(),
            })
    }

    /// Categorical attributes with their classes, keyed by wire name
    pub fn to_wire_map(&self) -> BTreeMap<String, Vec<String>> {
        self.classes
            .iter()
            .map(|(attr, classes)| (attr.wire_name().to_string(), classes.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> CategoryVocabulary {
        let records = vec![
            RawAttributeRecord::new()
                .with(Attribute::Type, "Herding")
                .with(Attribute::SheddingLevel, "Moderate"),
            RawAttributeRecord::new()
                .with(Attribute::Type, "Toy")
                .with(Attribute::SheddingLevel, "low"),
            RawAttributeRecord::new()
                .with(Attribute::Type, " herding ")
                .with(Attribute::SheddingLevel, "High"),
        ];
        CategoryVocabulary::fit(&records)
    }

    #[test]
    fn test_classes_are_sorted_and_deduplicated() {
        let vocab = vocabulary();
        assert_eq!(vocab.classes(Attribute::Type), &["Herding", "Toy"]);
        assert_eq!(vocab.classes(Attribute::SheddingLevel), &["High", "low", "Moderate"]);
        assert!(vocab.classes(Attribute::Size).is_empty());
    }

    #[test]
    fn test_encode_known_value() {
        let vocab = vocabulary();
        assert_eq!(vocab.encode(Attribute::Type, &"Toy".into()).unwrap(), 1);
        assert_eq!(vocab.encode(Attribute::Type, &" HERDING".into()).unwrap(), 0);
    }

    #[test]
    fn test_encode_unknown_value() {
        let vocab = vocabulary();
        let err = vocab.encode(Attribute::Type, &"Sporting".into()).unwrap_err();
        match err {
            FeatureError::UnknownCategory { field, value, allowed } => {
                assert_eq!(field, "Type");
                assert_eq!(value, "Sporting");
                assert_eq!(allowed.len(), 2);
            }
            other => panic!("expected UnknownCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_encode_wrong_type_and_missing() {
        let vocab = vocabulary();
        assert!(matches!(
            vocab.encode(Attribute::Type, &AttributeValue::Number(1.0)),
            Err(FeatureError::WrongType { .. })
        ));
        assert!(matches!(
            vocab.encode(Attribute::Type, &AttributeValue::Absent),
            Err(FeatureError::MissingField { .. })
        ));
    }
}
