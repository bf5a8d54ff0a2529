//! Application layer for lectio
//!
//! This crate contains use cases and port definitions. It depends only on
//! the domain layer.
//!
//! The lifecycle is two-phase: [`LoadCorpusUseCase`] is the single
//! asynchronous step and yields the loaded corpus; [`GeneratePlanUseCase`]
//! is pure and synchronous and can only be built from that corpus, so
//! generation before loading is unrepresentable.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    corpus_source::{CorpusSource, CorpusSourceError},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::generate_plan::{GeneratePlanError, GeneratePlanInput, GeneratePlanUseCase};
pub use use_cases::load_corpus::{LoadCorpusError, LoadCorpusUseCase};
