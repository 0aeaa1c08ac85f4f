//! Redaction rules
//!
//! Every rule reads a parsed [`redactor_core::Document`] and returns new
//! text. Regex and entity rules replace each match with filler of the same
//! character length; concept redaction blanks whole sentences.

pub mod address;
pub mod concept;
pub mod dates;
pub mod names;
pub mod patterns;
pub mod phones;
pub mod policy;
pub mod rule;

pub use address::AddressRule;
pub use concept::ConceptRule;
pub use dates::DateRule;
pub use names::NameRule;
pub use phones::PhoneRule;
pub use policy::{DEFAULT_EXCEPTION_WORDS, DEFAULT_FILLER, RedactionPolicy};
pub use rule::{RedactionRule, RuleOutput};
