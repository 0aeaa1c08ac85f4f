//! Document parser trait

use std::path::Path;

use redactor_core::{Document, Result};
use tracing::debug;

use crate::entities::EntityRecognizer;
use crate::gazetteer::Gazetteer;
use crate::sentences::SentenceSplitter;

/// Source of entity and sentence structure for a text
///
/// Implementations must be deterministic: the same text always yields the
/// same document.
pub trait DocumentParser: Send + Sync {
    /// Parse text into a document with entities and sentences
    fn parse(&self, text: &str) -> Result<Document>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// Gazetteer and heuristics based parser
#[derive(Debug, Clone, Default)]
pub struct RuleParser {
    recognizer: EntityRecognizer,
    splitter: SentenceSplitter,
}

impl RuleParser {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self {
            recognizer: EntityRecognizer::new(gazetteer),
            splitter: SentenceSplitter::new(),
        }
    }

    /// Parser using the built-in gazetteer, extended from `path` when given
    pub fn from_gazetteer_path(path: Option<&Path>) -> Result<Self> {
        let gazetteer = match path {
            Some(path) => Gazetteer::load(path)?,
            None => Gazetteer::builtin(),
        };
        Ok(Self::new(gazetteer))
    }
}

impl DocumentParser for RuleParser {
    fn parse(&self, text: &str) -> Result<Document> {
        let entities = self.recognizer.recognize(text);
        let sentences = self.splitter.split(text);
        debug!(
            "Parsed {} chars into {} entities and {} sentences",
            text.len(),
            entities.len(),
            sentences.len()
        );

        Ok(Document::new(text)
            .with_entities(entities)
            .with_sentences(sentences))
    }

    fn name(&self) -> &'static str {
        "rule"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactor_core::EntityLabel;

    #[test]
    fn test_parse_is_deterministic() {
        let parser = RuleParser::default();
        let text = "Jane Smith flew to Paris. She met Bob there.";

        let first = parser.parse(text).unwrap();
        let second = parser.parse(text).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.text(), text);
        assert_eq!(first.sentences().len(), 2);
    }

    #[test]
    fn test_parse_labels() {
        let doc = RuleParser::default()
            .parse("John Doe met with the Enron team.")
            .unwrap();
        let labels: Vec<_> = doc
            .entities()
            .iter()
            .map(|e| (e.text.as_str(), e.label.clone()))
            .collect();
        assert_eq!(
            labels,
            vec![("John Doe", EntityLabel::Person), ("Enron", EntityLabel::Org)]
        );
    }

    #[test]
    fn test_missing_gazetteer_fails_up_front() {
        let result = RuleParser::from_gazetteer_path(Some(Path::new("/nonexistent/names.toml")));
        assert!(result.is_err());
    }
}
