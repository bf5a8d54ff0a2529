//! Local file corpus source
//!
//! Reads the flat verse record document from disk. The document is a JSON
//! array of camelCase records, pre-sorted in reading order.

use async_trait::async_trait;
use lectio_application::{CorpusSource, CorpusSourceError};
use lectio_domain::VerseRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Corpus source backed by a local JSON document
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The document path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CorpusSource for JsonFileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch_records(&self) -> Result<Vec<VerseRecord>, CorpusSourceError> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| CorpusSourceError::read(self.origin(), e))?;
        debug!("Read {} bytes from {:?}", raw.len(), self.path);

        serde_json::from_str(&raw).map_err(|e| CorpusSourceError::parse(self.origin(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_record_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("verses.json");
        fs::write(
            &path,
            r#"[
                {"bookOrdinal": 1, "bookName": "Genesis", "chapterNum": 1, "verseNum": 1, "textLength": 10},
                {"bookOrdinal": 1, "bookName": "Genesis", "chapterNum": 1, "verseNum": 2, "textLength": 13}
            ]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let records = source.fetch_records().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].book_name, "Genesis");
        assert_eq!(records[1].text_length, 13);
    }

    #[tokio::test]
    async fn test_missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));

        let error = source.fetch_records().await.unwrap_err();
        assert!(matches!(error, CorpusSourceError::Read { .. }));
    }

    #[tokio::test]
    async fn test_malformed_document_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("verses.json");
        fs::write(&path, "{not json").unwrap();

        let source = JsonFileSource::new(&path);
        let error = source.fetch_records().await.unwrap_err();
        assert!(matches!(error, CorpusSourceError::Parse { .. }));
    }
}
