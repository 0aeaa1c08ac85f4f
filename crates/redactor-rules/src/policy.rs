use std::collections::BTreeSet;

pub const DEFAULT_FILLER: char = '█';
pub const DEFAULT_EXCEPTION_WORDS: &[&str] = &["Enron"];

/// Filler character and names the name rule never redacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactionPolicy {
    pub filler: char,
    pub exceptions: BTreeSet<String>,
}

impl RedactionPolicy {
    pub fn new(filler: char, exceptions: impl IntoIterator<Item = String>) -> Self {
        Self {
            filler,
            exceptions: exceptions.into_iter().collect(),
        }
    }

    /// Filler with the same character length as `matched`
    pub fn mask(&self, matched: &str) -> String {
        std::iter::repeat_n(self.filler, matched.chars().count()).collect()
    }

    pub fn is_exception(&self, text: &str) -> bool {
        self.exceptions.contains(text)
    }
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_FILLER,
            DEFAULT_EXCEPTION_WORDS.iter().map(|w| w.to_string()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_counts_characters() {
        let policy = RedactionPolicy::default();
        assert_eq!(policy.mask("José"), "████");
        assert_eq!(policy.mask(""), "");
    }

    #[test]
    fn test_default_exceptions() {
        let policy = RedactionPolicy::default();
        assert!(policy.is_exception("Enron"));
        assert!(!policy.is_exception("enron"));
    }

    #[test]
    fn test_custom_filler() {
        let policy = RedactionPolicy::new('*', Vec::new());
        assert_eq!(policy.mask("abc"), "***");
        assert!(!policy.is_exception("Enron"));
    }
}
