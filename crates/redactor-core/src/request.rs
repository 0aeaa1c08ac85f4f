//! What to redact

use serde::{Deserialize, Serialize};

/// A redaction rule category, in the order the orchestrator applies them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Names,
    Dates,
    Phones,
    Address,
    Concept,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Names => "names",
            Category::Dates => "dates",
            Category::Phones => "phones",
            Category::Address => "address",
            Category::Concept => "concept",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Enabled flag categories. Concept redaction is driven by the concept list instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionFlags {
    pub names: bool,
    pub dates: bool,
    pub phones: bool,
    pub address: bool,
}

impl RedactionFlags {
    pub fn all() -> Self {
        Self {
            names: true,
            dates: true,
            phones: true,
            address: true,
        }
    }

    /// Enabled categories in application order: names, dates, phones, address
    pub fn enabled(&self) -> Vec<Category> {
        [
            (self.names, Category::Names),
            (self.dates, Category::Dates),
            (self.phones, Category::Phones),
            (self.address, Category::Address),
        ]
        .into_iter()
        .filter_map(|(on, category)| on.then_some(category))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        !(self.names || self.dates || self.phones || self.address)
    }
}

/// Flags plus concepts for one redaction pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionRequest {
    pub flags: RedactionFlags,
    #[serde(default)]
    pub concepts: Vec<String>,
}

impl RedactionRequest {
    pub fn new(flags: RedactionFlags, concepts: Vec<String>) -> Self {
        Self { flags, concepts }
    }

    /// Every category that will run, concept last when any concept is given
    pub fn steps(&self) -> Vec<Category> {
        let mut steps = self.flags.enabled();
        if !self.concepts.is_empty() {
            steps.push(Category::Concept);
        }
        steps
    }
}

/// How many replacements one rule made in one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionInfo {
    pub category: Category,
    pub count: usize,
}
