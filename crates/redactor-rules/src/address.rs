use redactor_core::{Category, Document, EntityLabel};

use crate::patterns::ADDRESS_PATTERN;
use crate::policy::RedactionPolicy;
use crate::rule::{RedactionRule, RuleOutput, mask_literal, mask_pattern};

const PLACE_LABELS: &[EntityLabel] = &[EntityLabel::Gpe, EntityLabel::Loc, EntityLabel::Fac];

/// Masks street addresses, then every occurrence of recognized places
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressRule;

impl RedactionRule for AddressRule {
    fn category(&self) -> Category {
        Category::Address
    }

    fn apply(&self, doc: &Document, policy: &RedactionPolicy) -> RuleOutput {
        let (mut text, mut count) = mask_pattern(&ADDRESS_PATTERN, doc.text(), policy);

        for entity in doc.entities_labelled(PLACE_LABELS) {
            let (masked, hits) = mask_literal(&text, &entity.text, policy);
            text = masked;
            count += hits;
        }

        RuleOutput { text, count }
    }
}
