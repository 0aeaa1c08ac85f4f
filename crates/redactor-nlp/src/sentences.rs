//! Sentence segmentation

use redactor_core::SentenceSpan;

use crate::lexicon::{self, ABBREVIATIONS};

/// Splits text on terminal punctuation and blank lines
///
/// A `.`, `!` or `?` (with any trailing quotes or brackets) ends a sentence
/// when whitespace follows and the next character is not a lowercase
/// letter, or when the text ends. Filler left by an earlier redaction
/// therefore starts a sentence like any other symbol. Periods after
/// abbreviations and single-letter initials do not end a sentence.
/// Returned spans are trimmed of surrounding whitespace.
#[derive(Debug, Clone, Default)]
pub struct SentenceSplitter;

impl SentenceSplitter {
    pub fn new() -> Self {
        Self
    }

    pub fn split(&self, text: &str) -> Vec<SentenceSpan> {
        let chars: Vec<(usize, char)> = text.char_indices().collect();
        let byte_at = |index: usize| chars.get(index).map_or(text.len(), |(pos, _)| *pos);

        let mut spans = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < chars.len() {
            let (pos, ch) = chars[i];

            if ch == '\n' {
                let mut j = i + 1;
                while j < chars.len() && matches!(chars[j].1, ' ' | '\t' | '\r') {
                    j += 1;
                }
                if j < chars.len() && chars[j].1 == '\n' {
                    push_trimmed(text, start, pos, &mut spans);
                    while j < chars.len() && chars[j].1.is_whitespace() {
                        j += 1;
                    }
                    start = byte_at(j);
                    i = j;
                    continue;
                }
            }

            if is_terminator(ch) {
                let mut j = i + 1;
                while j < chars.len() && (is_terminator(chars[j].1) || is_closing(chars[j].1)) {
                    j += 1;
                }
                let mut k = j;
                while k < chars.len() && chars[k].1.is_whitespace() {
                    k += 1;
                }

                let at_end = k == chars.len();
                let opens_next = k > j && k < chars.len() && opens_sentence(chars[k].1);
                let abbreviated = ch == '.' && j == i + 1 && ends_with_abbreviation(&text[start..pos]);

                if (at_end || opens_next) && !abbreviated {
                    push_trimmed(text, start, byte_at(j), &mut spans);
                    start = byte_at(k);
                    i = k;
                    continue;
                }
                i = j;
                continue;
            }

            i += 1;
        }

        push_trimmed(text, start, text.len(), &mut spans);
        spans
    }
}

fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_closing(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '’' | '”' | ')' | ']')
}

fn opens_sentence(ch: char) -> bool {
    !ch.is_lowercase()
}

/// `before` is the text up to (not including) a period
fn ends_with_abbreviation(before: &str) -> bool {
    let word = before
        .rsplit(|c: char| c.is_whitespace() || matches!(c, '(' | '"' | '“'))
        .next()
        .unwrap_or("");
    if word.is_empty() {
        return false;
    }
    let mut letters = word.chars();
    if matches!((letters.next(), letters.next()), (Some(c), None) if c.is_alphabetic()) {
        return true;
    }
    lexicon::contains(ABBREVIATIONS, &word.to_lowercase())
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<SentenceSpan>) {
    let slice = &text[start..end];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let lead = slice.len() - slice.trim_start().len();
    let begin = start + lead;
    spans.push(SentenceSpan::from_range(text, begin, begin + trimmed.len()));
}
