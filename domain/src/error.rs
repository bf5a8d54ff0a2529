//! Domain error types

use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level errors
///
/// All of these are construction-time validation failures; once the value
/// objects exist, corpus traversal and plan generation are infallible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Corpus contains no verses")]
    EmptyCorpus,

    #[error("Unknown verse: {0}")]
    UnknownVerse(String),

    #[error("Verse range is inverted: {from} comes after {to}")]
    InvertedVerseRange { from: String, to: String },

    #[error("Date range is inverted: {from} comes after {to}")]
    InvertedDateRange { from: NaiveDate, to: NaiveDate },
}
