//! Progress reporting for corpus loading

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use lectio_application::ProgressNotifier;
use std::sync::Mutex;
use std::time::Duration;

/// Reports corpus loading progress with a spinner
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap()
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_fetch_start(&self, origin: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix("Loading corpus");
        pb.set_message(origin.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_fetch_complete(&self, records: usize) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            pb.set_message(format!("{} records fetched", records));
        }
    }

    fn on_corpus_ready(&self, books: usize, verses: usize) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!(
                "{} ({} books, {} verses)",
                "ready".green(),
                books,
                verses
            ));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_fetch_start(&self, origin: &str) {
        println!("{} Loading corpus from {}", "->".cyan(), origin);
    }

    fn on_fetch_complete(&self, records: usize) {
        println!("  {} {} records", "v".green(), records);
    }

    fn on_corpus_ready(&self, books: usize, verses: usize) {
        println!(
            "  {} corpus ready: {} books, {} verses",
            "v".green(),
            books,
            verses
        );
    }
}
