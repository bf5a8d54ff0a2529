//! Infrastructure layer for lectio
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod corpus;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileCorpusConfig, FileOutputConfig};
#[cfg(feature = "remote-corpus")]
pub use corpus::HttpCorpusSource;
pub use corpus::JsonFileSource;
