//! Entity and sentence recognition
//!
//! Redaction rules consume a [`redactor_core::Document`] produced by a
//! [`DocumentParser`]. [`RuleParser`] is the built-in deterministic parser:
//! a gazetteer plus capitalization heuristics for entities and an
//! abbreviation-aware splitter for sentences.

pub mod entities;
pub mod gazetteer;
pub mod lexicon;
pub mod parser;
pub mod sentences;

pub use entities::EntityRecognizer;
pub use gazetteer::{Gazetteer, GazetteerFile};
pub use parser::{DocumentParser, RuleParser};
pub use sentences::SentenceSplitter;
