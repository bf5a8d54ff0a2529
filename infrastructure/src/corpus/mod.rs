//! Corpus source adapters

pub mod file_source;
#[cfg(feature = "remote-corpus")]
pub mod http_source;

pub use file_source::JsonFileSource;
#[cfg(feature = "remote-corpus")]
pub use http_source::HttpCorpusSource;
