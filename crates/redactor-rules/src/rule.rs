//! Rule trait and shared replacement helpers

use redactor_core::{Category, Document};
use regex::{Captures, Regex};

use crate::policy::RedactionPolicy;

/// Text produced by one rule and how many replacements it made
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutput {
    pub text: String,
    pub count: usize,
}

/// A single redaction transformation over a parsed document
pub trait RedactionRule: Send + Sync {
    fn category(&self) -> Category;

    /// Redact `doc`, returning new text. `doc` is never modified.
    fn apply(&self, doc: &Document, policy: &RedactionPolicy) -> RuleOutput;
}

/// Replace every match of `regex` with equal-length filler
pub(crate) fn mask_pattern(regex: &Regex, text: &str, policy: &RedactionPolicy) -> (String, usize) {
    let mut count = 0;
    let masked = regex.replace_all(text, |caps: &Captures<'_>| {
        count += 1;
        policy.mask(&caps[0])
    });
    (masked.into_owned(), count)
}

/// Replace every literal occurrence of `needle` with equal-length filler
pub(crate) fn mask_literal(text: &str, needle: &str, policy: &RedactionPolicy) -> (String, usize) {
    if needle.is_empty() {
        return (text.to_string(), 0);
    }
    let count = text.matches(needle).count();
    if count == 0 {
        return (text.to_string(), 0);
    }
    (text.replace(needle, &policy.mask(needle)), count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_literal_hits_every_occurrence() {
        let policy = RedactionPolicy::default();
        let (text, count) = mask_literal("Al met Alice and Al", "Al", &policy);
        assert_eq!(text, "██ met ██ice and ██");
        assert_eq!(count, 3);
    }

    #[test]
    fn test_mask_literal_ignores_empty_needle() {
        let policy = RedactionPolicy::default();
        assert_eq!(mask_literal("abc", "", &policy), ("abc".to_string(), 0));
    }

    #[test]
    fn test_mask_pattern_counts_matches() {
        let policy = RedactionPolicy::new('#', Vec::new());
        let regex = Regex::new(r"\d+").unwrap();
        assert_eq!(
            mask_pattern(&regex, "a1 b22 c333", &policy),
            ("a# b## c###".to_string(), 3)
        );
    }
}
