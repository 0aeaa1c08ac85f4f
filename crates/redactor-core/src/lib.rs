//! Core domain models for the redactor
//!
//! This crate contains:
//! - Parsed document model (Document, EntitySpan, SentenceSpan)
//! - Redaction request types (RedactionFlags, Category)
//! - Per-file and run-level statistics

pub mod document;
pub mod error;
pub mod request;
pub mod stats;

pub use document::{Document, EntityLabel, EntitySpan, SentenceSpan};
pub use error::{RedactorError, Result};
pub use request::{Category, RedactionFlags, RedactionInfo, RedactionRequest};
pub use stats::{FileStats, RunStats, StatsError, char_len};
