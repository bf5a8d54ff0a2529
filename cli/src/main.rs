//! CLI entrypoint for lectio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use lectio_application::{
    CorpusSource, GeneratePlanInput, GeneratePlanUseCase, LoadCorpusUseCase, NoProgress,
    ProgressNotifier,
};
use lectio_domain::VerseRef;
use lectio_infrastructure::{ConfigLoader, FileConfig, JsonFileSource};
use lectio_presentation::{Cli, ConsoleFormatter, OutputFormat, ProgressReporter};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    info!("Starting lectio");

    // === Dependency Injection ===
    // Pick the corpus source: CLI overrides config, a URL wins over a path.
    let source = corpus_source(&cli, &config)?;

    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let corpus = LoadCorpusUseCase::new(source)
        .execute_with_progress(progress.as_ref())
        .await?;

    // Resolve the date range: today through December 31 by default
    let today = Local::now().date_naive();
    let from_date = cli.from_date.unwrap_or(today);
    let to_date = cli.to_date.unwrap_or_else(|| year_end(from_date));

    // Resolve the verse selection
    let mut input = GeneratePlanInput::new(from_date, to_date);
    match (&cli.from_verse, &cli.to_verse) {
        (Some(from), Some(to)) => {
            let from: VerseRef = from.parse()?;
            let to: VerseRef = to.parse()?;
            input = input.with_range(from, to);
        }
        (None, None) => {}
        _ => bail!("FROM and TO verses must be given together"),
    }

    let plan = GeneratePlanUseCase::new(Arc::new(corpus)).execute(input)?;

    // Output
    let format = match cli.output {
        Some(format) => format,
        None => OutputFormat::from_config(&config.output.format).unwrap_or_else(|| {
            warn!(
                "Unknown output format '{}' in config, using table",
                config.output.format
            );
            OutputFormat::Table
        }),
    };

    let rendered = match format {
        OutputFormat::Table => ConsoleFormatter::format(&plan),
        OutputFormat::Tsv => ConsoleFormatter::format_tsv(&plan),
        OutputFormat::Json => ConsoleFormatter::format_json(&plan),
    };

    println!("{}", rendered);

    Ok(())
}

/// Build the corpus source from CLI overrides and configuration
fn corpus_source(cli: &Cli, config: &FileConfig) -> Result<Arc<dyn CorpusSource>> {
    let url = cli.corpus_url.clone().or_else(|| config.corpus.url.clone());

    if let Some(url) = url {
        #[cfg(feature = "remote-corpus")]
        {
            return Ok(Arc::new(lectio_infrastructure::HttpCorpusSource::new(url)));
        }
        #[cfg(not(feature = "remote-corpus"))]
        bail!(
            "Corpus URL {} given, but this build lacks the remote-corpus feature",
            url
        );
    }

    let path = cli
        .corpus
        .clone()
        .unwrap_or_else(|| config.corpus.path.clone().into());
    Ok(Arc::new(JsonFileSource::new(path)))
}

/// December 31 of the year `date` falls in
fn year_end(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).expect("December 31 always exists")
}
