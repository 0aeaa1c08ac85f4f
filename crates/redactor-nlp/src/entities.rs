//! Rule-based named entity recognition
//!
//! Entities are found in runs of capitalized words (optionally joined by
//! connectors like `of` or `&`). Each run is cut into the longest windows
//! that classify, left to right:
//!
//! 1. month or weekday first word → `DATE` (ignored by every redaction rule)
//! 2. gazetteer phrase → its label
//! 3. organization suffix (`Inc.`, `University`...) or `Bank of ...` head → ORG
//! 4. street or building suffix → FAC
//! 5. river, lake, ocean... suffix → LOC
//! 6. two-letter state code in an address context → GPE
//! 7. preceded by a title, or starting with a known given name → PERSON

use std::sync::LazyLock;

use redactor_core::{EntityLabel, EntitySpan};
use regex::Regex;

use crate::gazetteer::Gazetteer;
use crate::lexicon::{
    self, CONNECTORS, FAC_SUFFIXES, FUNCTION_WORDS, LOC_SUFFIXES, MONTHS, ORG_HEADS, ORG_SUFFIXES,
    STATE_CODES, TITLES, WEEKDAYS,
};

static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\p{L}\p{M}&][\p{L}\p{M}\p{N}'’&-]*\.?").unwrap());

static ZIP_AFTER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]+\d{5}").unwrap());

#[derive(Debug, Clone, Copy)]
struct Word<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

impl<'a> Word<'a> {
    /// Text without a sentence period or possessive `'s`
    fn bare(&self) -> &'a str {
        let mut bare = self.text;
        if bare.ends_with('.') && !lexicon::keeps_period(bare) {
            bare = &bare[..bare.len() - 1];
        }
        bare.strip_suffix("'s")
            .or_else(|| bare.strip_suffix("’s"))
            .unwrap_or(bare)
    }

    fn bare_end(&self) -> usize {
        self.start + self.bare().len()
    }

    fn is_capitalized(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }

    /// Nothing after this word can belong to the same name
    fn closes_run(&self) -> bool {
        self.bare().len() != self.text.len()
    }

    fn is_connector(&self) -> bool {
        lexicon::contains(CONNECTORS, self.text)
    }

    fn in_list(&self, list: &[&str]) -> bool {
        lexicon::contains(list, self.text) || lexicon::contains(list, self.bare())
    }
}

/// Finds PERSON, ORG, GPE, LOC and FAC entities in text
#[derive(Debug, Clone, Default)]
pub struct EntityRecognizer {
    gazetteer: Gazetteer,
}

impl EntityRecognizer {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    /// Entities in the order they appear in `text`
    pub fn recognize(&self, text: &str) -> Vec<EntitySpan> {
        let mut entities = Vec::new();
        for run in capitalized_runs(text) {
            self.recognize_run(text, &run, &mut entities);
        }
        entities
    }

    fn recognize_run(&self, text: &str, run: &[Word<'_>], entities: &mut Vec<EntitySpan>) {
        let mut i = 0;
        let mut titled = false;

        while i < run.len() {
            let word = &run[i];
            if lexicon::contains(TITLES, word.text) {
                titled = true;
                i += 1;
                continue;
            }
            if word.in_list(FUNCTION_WORDS) || word.is_connector() {
                titled = false;
                i += 1;
                continue;
            }

            let matched = (1..=run.len() - i).rev().find_map(|len| {
                let window = &run[i..i + len];
                if window.last().is_some_and(Word::is_connector) {
                    return None;
                }
                self.classify(text, window, i > 0, titled)
                    .map(|label| (len, label))
            });

            match matched {
                Some((len, label)) => {
                    let start = run[i].start;
                    let end = run[i + len - 1].bare_end();
                    entities.push(EntitySpan::from_range(text, start, end, label));
                    i += len;
                }
                None => i += 1,
            }
            titled = false;
        }
    }

    fn classify(
        &self,
        text: &str,
        window: &[Word<'_>],
        inside_run: bool,
        titled: bool,
    ) -> Option<EntityLabel> {
        let first = window.first()?;
        let last = window.last()?;
        let phrase = &text[first.start..last.bare_end()];
        let multi_word = window.len() > 1;

        if first.in_list(MONTHS) || first.in_list(WEEKDAYS) {
            return Some(EntityLabel::Other("DATE".to_string()));
        }
        if let Some(label) = self.gazetteer.lookup(phrase) {
            return Some(label);
        }
        if multi_word && last.in_list(ORG_SUFFIXES) {
            return Some(EntityLabel::Org);
        }
        if window.len() > 2 && first.in_list(ORG_HEADS) && window[1].text == "of" {
            return Some(EntityLabel::Org);
        }
        if multi_word && last.in_list(FAC_SUFFIXES) {
            return Some(EntityLabel::Fac);
        }
        if multi_word && last.in_list(LOC_SUFFIXES) {
            return Some(EntityLabel::Loc);
        }
        if !multi_word
            && lexicon::contains(STATE_CODES, first.bare())
            && (inside_run || in_address_context(text, first))
        {
            return Some(EntityLabel::Gpe);
        }
        if titled || self.gazetteer.is_given_name(first.bare()) {
            return Some(EntityLabel::Person);
        }
        None
    }
}

/// `TX` in `Houston, TX` or `TX 77002`
fn in_address_context(text: &str, word: &Word<'_>) -> bool {
    text[..word.start].trim_end_matches([' ', '\t']).ends_with(',')
        || ZIP_AFTER_REGEX.is_match(&text[word.end..])
}

fn capitalized_runs(text: &str) -> Vec<Vec<Word<'_>>> {
    let words: Vec<Word<'_>> = WORD_REGEX
        .find_iter(text)
        .map(|m| Word {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        })
        .collect();

    let adjacent = |prev: &Word<'_>, next: &Word<'_>| {
        text[prev.end..next.start]
            .chars()
            .all(|c| c == ' ' || c == '\t')
    };

    let mut runs = Vec::new();
    let mut current: Vec<Word<'_>> = Vec::new();

    for (idx, word) in words.iter().enumerate() {
        let joins = current
            .last()
            .is_some_and(|prev| adjacent(prev, word) && !prev.closes_run());

        if word.is_capitalized() {
            if !joins && !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
            current.push(*word);
        } else if joins
            && word.is_connector()
            && words
                .get(idx + 1)
                .is_some_and(|next| next.is_capitalized() && adjacent(word, next))
        {
            current.push(*word);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}
