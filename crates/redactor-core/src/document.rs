//! Parsed document model

use serde::{Deserialize, Serialize};

/// Text plus the structure recognized in it.
///
/// Produced once per parse by a `DocumentParser`. Rules read it but never
/// mutate it; a rule that changes the text hands back a new string and the
/// next rule works from a fresh parse of that string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    text: String,
    entities: Vec<EntitySpan>,
    sentences: Vec<SentenceSpan>,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            entities: Vec::new(),
            sentences: Vec::new(),
        }
    }

    pub fn with_entities(mut self, entities: Vec<EntitySpan>) -> Self {
        self.entities = entities;
        self
    }

    pub fn with_sentences(mut self, sentences: Vec<SentenceSpan>) -> Self {
        self.sentences = sentences;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Entities in recognition order
    pub fn entities(&self) -> &[EntitySpan] {
        &self.entities
    }

    pub fn sentences(&self) -> &[SentenceSpan] {
        &self.sentences
    }

    /// Entities whose label is one of `labels`, in recognition order
    pub fn entities_labelled<'a>(
        &'a self,
        labels: &'a [EntityLabel],
    ) -> impl Iterator<Item = &'a EntitySpan> + 'a {
        self.entities
            .iter()
            .filter(move |entity| labels.contains(&entity.label))
    }
}

/// A labelled substring recognized as a person, organization, place...
///
/// `start` and `end` are byte offsets into the text of the owning document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    /// Build a span from a byte range of `source`
    pub fn from_range(source: &str, start: usize, end: usize, label: EntityLabel) -> Self {
        Self {
            text: source[start..end].to_string(),
            label,
            start,
            end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Loc,
    Fac,
    /// Any label outside the recognized set (DATE, MONEY, ...). Ignored by every rule.
    Other(String),
}

impl EntityLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Org => "ORG",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Fac => "FAC",
            EntityLabel::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "PERSON" => EntityLabel::Person,
            "ORG" => EntityLabel::Org,
            "GPE" => EntityLabel::Gpe,
            "LOC" => EntityLabel::Loc,
            "FAC" => EntityLabel::Fac,
            other => EntityLabel::Other(other.to_string()),
        }
    }
}

impl From<EntityLabel> for String {
    fn from(label: EntityLabel) -> Self {
        label.as_str().to_string()
    }
}

impl From<String> for EntityLabel {
    fn from(label: String) -> Self {
        EntityLabel::from_label(&label)
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A maximal unit treated as one sentence by segmentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceSpan {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl SentenceSpan {
    pub fn from_range(source: &str, start: usize, end: usize) -> Self {
        Self {
            text: source[start..end].to_string(),
            start,
            end,
        }
    }
}
