//! Corpus source port
//!
//! The corpus document is produced by an external collaborator (a local
//! file, an HTTP endpoint). Fetching it is the only suspension point in
//! the system and is strictly sequenced before any generation call.

use async_trait::async_trait;
use lectio_domain::VerseRecord;
use thiserror::Error;

/// Errors surfaced by a corpus source
///
/// A failed or partial fetch always surfaces here; the core never runs on
/// partial data.
#[derive(Error, Debug)]
pub enum CorpusSourceError {
    #[error("Failed to read corpus from {origin}: {message}")]
    Read { origin: String, message: String },

    #[error("Failed to fetch corpus from {origin}: {message}")]
    Fetch { origin: String, message: String },

    #[error("Failed to parse corpus from {origin}: {message}")]
    Parse { origin: String, message: String },
}

impl CorpusSourceError {
    /// A local read failure
    pub fn read(origin: impl Into<String>, source: impl std::fmt::Display) -> Self {
        CorpusSourceError::Read {
            origin: origin.into(),
            message: source.to_string(),
        }
    }

    /// A remote fetch failure
    pub fn fetch(origin: impl Into<String>, source: impl std::fmt::Display) -> Self {
        CorpusSourceError::Fetch {
            origin: origin.into(),
            message: source.to_string(),
        }
    }

    /// A document parse failure
    pub fn parse(origin: impl Into<String>, source: impl std::fmt::Display) -> Self {
        CorpusSourceError::Parse {
            origin: origin.into(),
            message: source.to_string(),
        }
    }
}

/// Provides the flat, pre-sorted verse record sequence
#[async_trait]
pub trait CorpusSource: Send + Sync {
    /// Human-readable description of where records come from (for logs)
    fn origin(&self) -> String;

    /// Fetch every record of the corpus document, in reading order
    async fn fetch_records(&self) -> Result<Vec<VerseRecord>, CorpusSourceError>;
}
