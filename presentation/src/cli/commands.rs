//! CLI command definitions

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for generated plans
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable day list with a summary header
    Table,
    /// `date<TAB>start<TAB>end` lines for spreadsheets
    Tsv,
    /// JSON output
    Json,
}

impl OutputFormat {
    /// Parse a config-file format name
    pub fn from_config(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "tsv" => Some(OutputFormat::Tsv),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// CLI arguments for lectio
#[derive(Parser, Debug)]
#[command(name = "lectio")]
#[command(author, version, about = "Daily Bible reading plan generator")]
#[command(long_about = r#"
Lectio partitions a verse range across a date range so every day carries
roughly the same reading volume, weighted by verse text length.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./lectio.toml       Project-level config
3. ~/.config/lectio/config.toml   Global config

Example:
  lectio
  lectio --from-date 2026-01-01 --to-date 2026-03-31
  lectio "Genesis 1:1" "Deuteronomy 34:12" --to-date 2026-02-28 -o tsv
"#)]
pub struct Cli {
    /// First verse of the selection, e.g. "Genesis 1:1" (defaults to the first verse of the corpus)
    pub from_verse: Option<String>,

    /// Last verse of the selection, e.g. "Revelation 22:21" (defaults to the last verse of the corpus)
    pub to_verse: Option<String>,

    /// First day of the plan (YYYY-MM-DD, defaults to today)
    #[arg(long, value_name = "DATE")]
    pub from_date: Option<NaiveDate>,

    /// Last day of the plan (YYYY-MM-DD, defaults to December 31 of the start year)
    #[arg(long, value_name = "DATE")]
    pub to_date: Option<NaiveDate>,

    /// Path of the corpus document (overrides config)
    #[arg(long, value_name = "PATH")]
    pub corpus: Option<PathBuf>,

    /// HTTP endpoint serving the corpus document (requires the remote-corpus feature)
    #[arg(long, value_name = "URL")]
    pub corpus_url: Option<String>,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_config() {
        assert_eq!(OutputFormat::from_config("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_config("TSV"), Some(OutputFormat::Tsv));
        assert_eq!(OutputFormat::from_config("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_config("yaml"), None);
    }

    #[test]
    fn test_cli_parses_verse_selection_and_dates() {
        let cli = Cli::parse_from([
            "lectio",
            "Genesis 1:1",
            "Exodus 40:38",
            "--from-date",
            "2026-01-01",
            "--to-date",
            "2026-06-30",
            "-o",
            "tsv",
        ]);

        assert_eq!(cli.from_verse.as_deref(), Some("Genesis 1:1"));
        assert_eq!(cli.to_verse.as_deref(), Some("Exodus 40:38"));
        assert_eq!(
            cli.from_date,
            NaiveDate::from_ymd_opt(2026, 1, 1)
        );
        assert_eq!(cli.output, Some(OutputFormat::Tsv));
    }
}
