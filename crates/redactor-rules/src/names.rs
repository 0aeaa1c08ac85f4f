use redactor_core::{Category, Document, EntityLabel};

use crate::policy::RedactionPolicy;
use crate::rule::{RedactionRule, RuleOutput, mask_literal};

const NAME_LABELS: &[EntityLabel] = &[EntityLabel::Person, EntityLabel::Org];

/// Masks people and organizations
///
/// Every literal occurrence of a recognized entity's text is masked, not just
/// the recognized span, so a short name also disappears from inside longer
/// words. Entities are handled in recognition order against the text left by
/// the previous replacement. Policy exceptions are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRule;

impl RedactionRule for NameRule {
    fn category(&self) -> Category {
        Category::Names
    }

    fn apply(&self, doc: &Document, policy: &RedactionPolicy) -> RuleOutput {
        let mut text = doc.text().to_string();
        let mut count = 0;

        for entity in doc.entities_labelled(NAME_LABELS) {
            if policy.is_exception(&entity.text) {
                continue;
            }
            let (masked, hits) = mask_literal(&text, &entity.text, policy);
            text = masked;
            count += hits;
        }

        RuleOutput { text, count }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_core::EntitySpan;

    fn doc(text: &str, entities: &[(&str, EntityLabel)]) -> Document {
        let spans = entities
            .iter()
            .map(|(needle, label)| {
                let start = text.find(needle).unwrap();
                EntitySpan::from_range(text, start, start + needle.len(), label.clone())
            })
            .collect();
        Document::new(text).with_entities(spans)
    }

    #[test]
    fn test_person_redacted_enron_kept() {
        let doc = doc(
            "John Doe met with the Enron team.",
            &[("John Doe", EntityLabel::Person), ("Enron", EntityLabel::Org)],
        );
        let output = NameRule.apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "████████ met with the Enron team.");
        assert_eq!(output.count, 1);
    }

    #[test]
    fn test_every_occurrence_is_masked() {
        let doc = doc(
            "Ann wrote to Annette. Ann signed.",
            &[("Ann", EntityLabel::Person)],
        );
        let output = NameRule.apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "███ wrote to ███ette. ███ signed.");
        assert_eq!(output.count, 3);
    }

    #[test]
    fn test_other_labels_ignored() {
        let doc = doc(
            "Paris on Monday",
            &[
                ("Paris", EntityLabel::Gpe),
                ("Monday", EntityLabel::Other("DATE".to_string())),
            ],
        );
        let output = NameRule.apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "Paris on Monday");
        assert_eq!(output.count, 0);
    }

    #[test]
    fn test_later_entity_sees_masked_text() {
        let doc = doc(
            "Jane Smith and Smith Corp",
            &[
                ("Jane Smith", EntityLabel::Person),
                ("Smith Corp", EntityLabel::Org),
            ],
        );
        let output = NameRule.apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "██████████ and ██████████");
        assert_eq!(output.count, 2);
    }

    #[test]
    fn test_rerun_on_output_is_noop() {
        let policy = RedactionPolicy::default();
        let people = [("Bob", EntityLabel::Person), ("Alice", EntityLabel::Person)];
        let first = NameRule.apply(&doc("Bob called Alice.", &people), &policy);
        let second = NameRule.apply(&doc(&first.text, &[]), &policy);
        assert_eq!(second.text, first.text);
        assert_eq!(second.count, 0);
    }
}
