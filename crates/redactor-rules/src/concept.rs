use redactor_core::{Category, Document};

use crate::policy::RedactionPolicy;
use crate::rule::{RedactionRule, RuleOutput};

/// Masks whole sentences that mention a concept
///
/// Matching is a case-insensitive substring test. A matching sentence becomes
/// filler of its own length. Sentences are rejoined with a single space, so
/// the original whitespace between them (newlines, double spaces) is not kept.
#[derive(Debug, Clone, Default)]
pub struct ConceptRule {
    concepts: Vec<String>,
}

impl ConceptRule {
    pub fn new<I, S>(concepts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            concepts: concepts
                .into_iter()
                .map(|c| c.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn matches(&self, sentence: &str) -> bool {
        let sentence = sentence.to_lowercase();
        self.concepts
            .iter()
            .any(|concept| sentence.contains(concept.as_str()))
    }
}

impl RedactionRule for ConceptRule {
    fn category(&self) -> Category {
        Category::Concept
    }

    fn apply(&self, doc: &Document, policy: &RedactionPolicy) -> RuleOutput {
        let mut count = 0;
        let sentences: Vec<String> = doc
            .sentences()
            .iter()
            .map(|sentence| {
                if self.matches(&sentence.text) {
                    count += 1;
                    policy.mask(&sentence.text)
                } else {
                    sentence.text.clone()
                }
            })
            .collect();

        RuleOutput {
            text: sentences.join(" "),
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_core::{SentenceSpan, char_len};

    fn doc(text: &str, sentences: &[&str]) -> Document {
        let spans = sentences
            .iter()
            .map(|s| {
                let start = text.find(s).unwrap();
                SentenceSpan::from_range(text, start, start + s.len())
            })
            .collect();
        Document::new(text).with_sentences(spans)
    }

    #[test]
    fn test_matching_sentence_is_blanked_whole() {
        let text = "The wine tasting was amazing. We also enjoyed other activities.";
        let doc = doc(
            text,
            &[
                "The wine tasting was amazing.",
                "We also enjoyed other activities.",
            ],
        );

        let output = ConceptRule::new(["wine"]).apply(&doc, &RedactionPolicy::default());
        let masked = "█".repeat(char_len("The wine tasting was amazing."));
        assert_eq!(
            output.text,
            format!("{} We also enjoyed other activities.", masked)
        );
        assert_eq!(output.count, 1);
        assert_eq!(char_len(&output.text), char_len(text));
    }

    #[test]
    fn test_case_insensitive() {
        let doc = doc("WINE is fine.", &["WINE is fine."]);
        let output = ConceptRule::new(["Wine"]).apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "█████████████");
    }

    #[test]
    fn test_rejoin_uses_single_space() {
        let text = "First line.\n\nSecond line.";
        let doc = doc(text, &["First line.", "Second line."]);

        let output = ConceptRule::new(["absent"]).apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "First line. Second line.");
        assert_eq!(output.count, 0);
        assert!(char_len(&output.text) < char_len(text));
    }

    #[test]
    fn test_any_concept_matches() {
        let doc = doc("Alpha here. Beta there.", &["Alpha here.", "Beta there."]);
        let output = ConceptRule::new(["gamma", "beta"]).apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "Alpha here. ███████████");
        assert_eq!(output.count, 1);
    }

    #[test]
    fn test_empty_concept_matches_everything() {
        let doc = doc("One. Two.", &["One.", "Two."]);
        let output = ConceptRule::new([""]).apply(&doc, &RedactionPolicy::default());
        assert_eq!(output.text, "████ ████");
        assert_eq!(output.count, 2);
    }
}
