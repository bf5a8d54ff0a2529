//! Remote corpus source
//!
//! Fetches the flat verse record document from an HTTP endpoint. Only
//! compiled with the `remote-corpus` feature.

use async_trait::async_trait;
use lectio_application::{CorpusSource, CorpusSourceError};
use lectio_domain::VerseRecord;
use tracing::debug;

/// Corpus source backed by an HTTP endpoint serving the record document
#[derive(Debug, Clone)]
pub struct HttpCorpusSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCorpusSource {
    /// Create a source fetching from `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// The endpoint URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CorpusSource for HttpCorpusSource {
    fn origin(&self) -> String {
        self.url.clone()
    }

    async fn fetch_records(&self) -> Result<Vec<VerseRecord>, CorpusSourceError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| CorpusSourceError::fetch(self.origin(), e))?
            .error_for_status()
            .map_err(|e| CorpusSourceError::fetch(self.origin(), e))?;

        debug!("Fetched corpus document from {}", self.url);

        response
            .json::<Vec<VerseRecord>>()
            .await
            .map_err(|e| CorpusSourceError::parse(self.origin(), e))
    }
}
