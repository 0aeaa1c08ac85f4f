//! Pattern library
//!
//! Each list is applied in order, every pattern scanning the text left by
//! the previous one. Order matters: the phone patterns are tried from the
//! most punctuated form down to bare digits, so `+1 (555) 123-4567` loses
//! its `(555) 123-4567` part to the first pattern and keeps the `+1 ` prefix.

use std::sync::LazyLock;

use regex::Regex;

fn compile(patterns: &[(&'static str, &str)]) -> Vec<(&'static str, Regex)> {
    patterns
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).unwrap()))
        .collect()
}

/// Date patterns in application order
pub static DATE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    compile(&[
        (
            "MONTH_DAY_YEAR",
            r"\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\s\d{1,2}(?:st|nd|rd|th)?,?\s?\d{4}\b",
        ),
        ("SLASHED", r"\b\d{1,2}/\d{1,2}/\d{2,4}\b"),
        ("ISO", r"\b\d{4}-\d{2}-\d{2}\b"),
        (
            "MON_DAY_YEAR",
            r"\b(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s\d{1,2}(?:st|nd|rd|th)?,?\s?\d{4}\b",
        ),
    ])
});

/// Phone patterns in application order
pub static PHONE_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    compile(&[
        // (555) 123-4567
        ("PARENTHESIZED", r"\(\d{3}\)\s?\d{3}-\d{4}"),
        // 555-123-4567
        ("DASHED", r"\d{3}-\d{3}-\d{4}"),
        // 5551234567
        ("BARE_DIGITS", r"\d{10}"),
        // +1 (555) 123-4567
        ("INTERNATIONAL", r"\+\d{1,2}\s?\(\d{3}\)\s?\d{3}-\d{4}"),
    ])
});

/// Street number, street, city, state code and ZIP
pub static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+\s+(?:[A-Za-z]+\s*)+,\s*(?:[A-Za-z]+\s*)+,\s*[A-Z]{2}\s+\d{5}(?:-\d{4})?")
        .unwrap()
});

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(regex: &Regex, text: &str) -> Vec<String> {
        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_date_patterns_in_order() {
        let names: Vec<_> = DATE_PATTERNS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["MONTH_DAY_YEAR", "SLASHED", "ISO", "MON_DAY_YEAR"]);

        assert_eq!(
            matches(&DATE_PATTERNS[0].1, "on March 3rd, 2001 and May 12 1999"),
            vec!["March 3rd, 2001", "May 12 1999"]
        );
        assert_eq!(
            matches(&DATE_PATTERNS[1].1, "1/2/03 or 12/31/2024"),
            vec!["1/2/03", "12/31/2024"]
        );
        assert_eq!(matches(&DATE_PATTERNS[2].1, "due 2024-06-30."), vec!["2024-06-30"]);
        assert_eq!(matches(&DATE_PATTERNS[3].1, "Sep 9, 2019"), vec!["Sep 9, 2019"]);
    }

    #[test]
    fn test_phone_patterns_in_order() {
        let names: Vec<_> = PHONE_PATTERNS.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec!["PARENTHESIZED", "DASHED", "BARE_DIGITS", "INTERNATIONAL"]
        );
        assert_eq!(
            matches(&PHONE_PATTERNS[0].1, "(555) 123-4567 (555)123-4567"),
            vec!["(555) 123-4567", "(555)123-4567"]
        );
        assert_eq!(
            matches(&PHONE_PATTERNS[3].1, "+44 (555) 123-4567"),
            vec!["+44 (555) 123-4567"]
        );
    }

    #[test]
    fn test_address_pattern() {
        assert_eq!(
            matches(
                &ADDRESS_PATTERN,
                "Mail 1400 Smith Street, Houston, TX 77002-7361 now"
            ),
            vec!["1400 Smith Street, Houston, TX 77002-7361"]
        );
        assert!(matches(&ADDRESS_PATTERN, "611 Jersey Ave., Jersey City NJ 07302").is_empty());
    }
}
