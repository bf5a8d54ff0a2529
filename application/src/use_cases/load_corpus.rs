//! Load Corpus use case
//!
//! Fetches the corpus document and builds the indexed catalog. This is the
//! only asynchronous step in the system; generation is gated on its
//! success because a [`Corpus`] value cannot exist otherwise.

use crate::ports::corpus_source::{CorpusSource, CorpusSourceError};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use lectio_domain::{Corpus, DomainError};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while loading the corpus
#[derive(Error, Debug)]
pub enum LoadCorpusError {
    #[error("Corpus source error: {0}")]
    Source(#[from] CorpusSourceError),

    #[error("Corpus rejected: {0}")]
    Corpus(#[from] DomainError),
}

/// Use case for loading the verse corpus
pub struct LoadCorpusUseCase<S: CorpusSource + ?Sized> {
    source: Arc<S>,
}

impl<S: CorpusSource + ?Sized> LoadCorpusUseCase<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<Corpus, LoadCorpusError> {
        self.execute_with_progress(&NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn ProgressNotifier,
    ) -> Result<Corpus, LoadCorpusError> {
        let origin = self.source.origin();
        info!("Loading corpus from {}", origin);
        progress.on_fetch_start(&origin);

        let records = self.source.fetch_records().await?;
        debug!("Fetched {} verse records", records.len());
        progress.on_fetch_complete(records.len());

        let corpus = Corpus::from_records(records)?;
        info!(
            "Corpus ready: {} books, {} verses",
            corpus.books().len(),
            corpus.len()
        );
        progress.on_corpus_ready(corpus.books().len(), corpus.len());

        Ok(corpus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lectio_domain::VerseRecord;

    struct StubSource(Vec<VerseRecord>);

    #[async_trait]
    impl CorpusSource for StubSource {
        fn origin(&self) -> String {
            "stub".to_string()
        }

        async fn fetch_records(&self) -> Result<Vec<VerseRecord>, CorpusSourceError> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl CorpusSource for FailingSource {
        fn origin(&self) -> String {
            "failing".to_string()
        }

        async fn fetch_records(&self) -> Result<Vec<VerseRecord>, CorpusSourceError> {
            Err(CorpusSourceError::fetch("failing", "connection refused"))
        }
    }

    fn sample_records() -> Vec<VerseRecord> {
        vec![
            VerseRecord {
                book_ordinal: 1,
                book_name: "Genesis".to_string(),
                chapter_num: 1,
                verse_num: 1,
                text_length: 10,
            },
            VerseRecord {
                book_ordinal: 1,
                book_name: "Genesis".to_string(),
                chapter_num: 1,
                verse_num: 2,
                text_length: 12,
            },
        ]
    }

    #[tokio::test]
    async fn test_load_builds_corpus() {
        let use_case = LoadCorpusUseCase::new(Arc::new(StubSource(sample_records())));

        let corpus = use_case.execute().await.unwrap();
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus.books().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_source_is_rejected() {
        let use_case = LoadCorpusUseCase::new(Arc::new(StubSource(Vec::new())));

        let error = use_case.execute().await.unwrap_err();
        assert!(matches!(
            error,
            LoadCorpusError::Corpus(DomainError::EmptyCorpus)
        ));
    }

    #[tokio::test]
    async fn test_source_failure_surfaces() {
        let use_case = LoadCorpusUseCase::new(Arc::new(FailingSource));

        let error = use_case.execute().await.unwrap_err();
        assert!(matches!(error, LoadCorpusError::Source(_)));
    }

    #[tokio::test]
    async fn test_object_safe_source() {
        let source: Arc<dyn CorpusSource> = Arc::new(StubSource(sample_records()));
        let use_case = LoadCorpusUseCase::new(source);

        assert!(use_case.execute().await.is_ok());
    }
}
