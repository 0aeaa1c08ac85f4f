use redactor_core::{Category, Document};

use crate::patterns::DATE_PATTERNS;
use crate::policy::RedactionPolicy;
use crate::rule::{RedactionRule, RuleOutput, mask_pattern};

/// Masks dates matched by the date pattern list
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRule;

impl RedactionRule for DateRule {
    fn category(&self) -> Category {
        Category::Dates
    }

    fn apply(&self, doc: &Document, policy: &RedactionPolicy) -> RuleOutput {
        let mut text = doc.text().to_string();
        let mut count = 0;

        for (_, pattern) in DATE_PATTERNS.iter() {
            let (masked, hits) = mask_pattern(pattern, &text, policy);
            text = masked;
            count += hits;
        }

        RuleOutput { text, count }
    }
}
