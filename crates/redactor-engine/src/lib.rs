//! Redaction orchestrator
//!
//! Applies the enabled rules to one document in the fixed order
//! names → dates → phones → address → concept. Before every rule the
//! current text is parsed again, since spans found in the original text no
//! longer line up once an earlier rule has changed it.

use std::sync::Arc;

use redactor_core::{Category, FileStats, RedactionInfo, RedactionRequest, Result};
use redactor_nlp::{DocumentParser, RuleParser};
use redactor_rules::{
    AddressRule, ConceptRule, DateRule, NameRule, PhoneRule, RedactionPolicy, RedactionRule,
};
use tracing::debug;

/// Final text of one document and its statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactedDocument {
    pub text: String,
    pub stats: FileStats,
}

pub struct Redactor {
    parser: Arc<dyn DocumentParser>,
    policy: RedactionPolicy,
}

impl Redactor {
    pub fn new(parser: Arc<dyn DocumentParser>, policy: RedactionPolicy) -> Self {
        Self { parser, policy }
    }

    /// Redact a whole document
    pub fn redact(&self, text: &str, request: &RedactionRequest) -> Result<RedactedDocument> {
        let mut current = text.to_string();
        let mut redactions = Vec::new();

        for rule in rules_for(request) {
            // 1. Re-derive structure from the current text
            let doc = self.parser.parse(&current)?;

            // 2. Apply
            let output = rule.apply(&doc, &self.policy);
            debug!(
                "{} rule ({} parser): {} replacements",
                rule.category(),
                self.parser.name(),
                output.count
            );

            if output.count > 0 {
                redactions.push(RedactionInfo {
                    category: rule.category(),
                    count: output.count,
                });
            }
            current = output.text;
        }

        let stats = FileStats::new(text, &current).with_redactions(redactions);
        Ok(RedactedDocument {
            text: current,
            stats,
        })
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new(Arc::new(RuleParser::default()), RedactionPolicy::default())
    }
}

/// Rules for the request, in application order
fn rules_for(request: &RedactionRequest) -> Vec<Box<dyn RedactionRule>> {
    request
        .steps()
        .into_iter()
        .map(|category| -> Box<dyn RedactionRule> {
            match category {
                Category::Names => Box::new(NameRule),
                Category::Dates => Box::new(DateRule),
                Category::Phones => Box::new(PhoneRule),
                Category::Address => Box::new(AddressRule),
                Category::Concept => Box::new(ConceptRule::new(&request.concepts)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_core::RedactionFlags;

    fn request(flags: RedactionFlags, concepts: &[&str]) -> RedactionRequest {
        RedactionRequest::new(flags, concepts.iter().map(|c| c.to_string()).collect())
    }

    #[test]
    fn test_rules_follow_fixed_order() {
        let request = request(RedactionFlags::all(), &["x"]);
        let order: Vec<_> = rules_for(&request).iter().map(|r| r.category()).collect();
        assert_eq!(
            order,
            vec![
                Category::Names,
                Category::Dates,
                Category::Phones,
                Category::Address,
                Category::Concept
            ]
        );
    }

    #[test]
    fn test_no_flags_passes_through() {
        let text = "John Doe called (555) 123-4567 on 2024-01-02.";
        let result = Redactor::default()
            .redact(text, &request(RedactionFlags::default(), &[]))
            .unwrap();

        assert_eq!(result.text, text);
        assert_eq!(result.stats.percentage(), Some(0.0));
        assert!(result.stats.redactions.is_empty());
    }

    #[test]
    fn test_names_with_builtin_parser() {
        let flags = RedactionFlags {
            names: true,
            ..Default::default()
        };
        let result = Redactor::default()
            .redact("John Doe met with the Enron team.", &request(flags, &[]))
            .unwrap();

        assert_eq!(result.text, "████████ met with the Enron team.");
        assert_eq!(
            result.stats.redactions,
            vec![RedactionInfo {
                category: Category::Names,
                count: 1
            }]
        );
    }

    #[test]
    fn test_all_rules_with_builtin_parser() {
        let text = "Jane Smith moved to Houston on 2020-05-01. Call her at 555-123-4567.";
        let result = Redactor::default()
            .redact(text, &request(RedactionFlags::all(), &[]))
            .unwrap();

        assert_eq!(
            result.text,
            "██████████ moved to ███████ on ██████████. Call her at ████████████."
        );
        assert_eq!(result.stats.original_length, result.stats.redacted_length);
        assert_eq!(result.stats.redaction_count(), 4);
    }

    #[test]
    fn test_empty_document() {
        let result = Redactor::default()
            .redact("", &request(RedactionFlags::all(), &["secret"]))
            .unwrap();
        assert_eq!(result.text, "");
        assert_eq!(result.stats.original_length, 0);
        assert_eq!(result.stats.percentage(), None);
    }
}
