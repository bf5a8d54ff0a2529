//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! are deserialized directly.

use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Corpus source settings
    pub corpus: FileCorpusConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

/// `[corpus]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCorpusConfig {
    /// Path of the local corpus document
    pub path: String,
    /// Optional HTTP endpoint serving the corpus document
    /// (honored when the `remote-corpus` feature is enabled)
    pub url: Option<String>,
}

impl Default for FileCorpusConfig {
    fn default() -> Self {
        Self {
            path: "verses.json".to_string(),
            url: None,
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default output format: "table", "tsv" or "json"
    pub format: String,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
        }
    }
}
