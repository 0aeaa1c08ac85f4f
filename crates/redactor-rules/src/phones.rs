use redactor_core::{Category, Document};

use crate::patterns::PHONE_PATTERNS;
use crate::policy::RedactionPolicy;
use crate::rule::{RedactionRule, RuleOutput, mask_pattern};

/// Masks phone numbers matched by the phone pattern list
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneRule;

impl RedactionRule for PhoneRule {
    fn category(&self) -> Category {
        Category::Phones
    }

    fn apply(&self, doc: &Document, policy: &RedactionPolicy) -> RuleOutput {
        let mut text = doc.text().to_string();
        let mut count = 0;

        for (_, pattern) in PHONE_PATTERNS.iter() {
            let (masked, hits) = mask_pattern(pattern, &text, policy);
            text = masked;
            count += hits;
        }

        RuleOutput { text, count }
    }
}
