//! Redaction statistics
//!
//! Lengths are counted in characters (Unicode scalar values), so a filler
//! glyph that takes several bytes still counts as one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::request::RedactionInfo;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    #[error("redaction percentage is undefined: no original characters were processed")]
    EmptyRun,
}

/// Character length of `text`
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Statistics for a single processed document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStats {
    pub original_length: usize,
    pub redacted_length: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub redactions: Vec<RedactionInfo>,
}

impl FileStats {
    pub fn new(original: &str, redacted: &str) -> Self {
        Self {
            original_length: char_len(original),
            redacted_length: char_len(redacted),
            redactions: Vec::new(),
        }
    }

    pub fn with_redactions(mut self, redactions: Vec<RedactionInfo>) -> Self {
        self.redactions = redactions;
        self
    }

    /// Total replacements made across every rule
    pub fn redaction_count(&self) -> usize {
        self.redactions.iter().map(|info| info.count).sum()
    }

    /// Signed length change in percent, `None` for an empty document
    pub fn percentage(&self) -> Option<f64> {
        percentage(self.original_length, self.redacted_length).ok()
    }
}

/// Run-level totals, append-only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    pub files_processed: usize,
    pub total_chars_original: usize,
    pub total_chars_redacted: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, file: &FileStats) {
        self.files_processed += 1;
        self.total_chars_original += file.original_length;
        self.total_chars_redacted += file.redacted_length;
    }

    /// `(total_redacted - total_original) / total_original * 100`
    ///
    /// Negative when redaction shortened the text, positive when it grew.
    pub fn redaction_percentage(&self) -> Result<f64, StatsError> {
        percentage(self.total_chars_original, self.total_chars_redacted)
    }

    /// Plain `key: value` lines, one per metric
    pub fn to_key_value_lines(&self) -> String {
        let percentage = match self.redaction_percentage() {
            Ok(value) => format!("{:?}", value),
            Err(_) => "N/A".to_string(),
        };

        [
            format!("files_processed: {}", self.files_processed),
            format!("total_chars_original: {}", self.total_chars_original),
            format!("total_chars_redacted: {}", self.total_chars_redacted),
            format!("redaction_percentage: {}", percentage),
        ]
        .join("\n")
    }
}

fn percentage(original: usize, redacted: usize) -> Result<f64, StatsError> {
    if original == 0 {
        return Err(StatsError::EmptyRun);
    }
    Ok((redacted as f64 - original as f64) / original as f64 * 100.0)
}
