//! Generate Plan use case
//!
//! Validates a plan request into domain value objects and runs the
//! generator over the loaded corpus.

use chrono::NaiveDate;
use lectio_domain::plan::generator;
use lectio_domain::{Corpus, DateRange, DomainError, ReadingPlan, VerseRef};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur during plan generation
#[derive(Error, Debug)]
pub enum GeneratePlanError {
    #[error("Invalid plan request: {0}")]
    Invalid(#[from] DomainError),
}

/// Input for the GeneratePlan use case
#[derive(Debug, Clone)]
pub struct GeneratePlanInput {
    /// First calendar day of the plan
    pub from_date: NaiveDate,
    /// Last calendar day of the plan (inclusive)
    pub to_date: NaiveDate,
    /// Optional verse selection; defaults to the full corpus span
    pub range: Option<(VerseRef, VerseRef)>,
}

impl GeneratePlanInput {
    pub fn new(from_date: NaiveDate, to_date: NaiveDate) -> Self {
        Self {
            from_date,
            to_date,
            range: None,
        }
    }

    /// Restrict the plan to a verse selection
    pub fn with_range(mut self, from: VerseRef, to: VerseRef) -> Self {
        self.range = Some((from, to));
        self
    }
}

/// Use case for generating a daily reading plan
///
/// Owns the loaded corpus. Each execution is independent and deterministic
/// and produces a freshly allocated plan; nothing is updated in place.
pub struct GeneratePlanUseCase {
    corpus: Arc<Corpus>,
}

impl GeneratePlanUseCase {
    pub fn new(corpus: Arc<Corpus>) -> Self {
        Self { corpus }
    }

    /// Execute the use case
    pub fn execute(&self, input: GeneratePlanInput) -> Result<ReadingPlan, GeneratePlanError> {
        let dates = DateRange::new(input.from_date, input.to_date)?;
        let range = match &input.range {
            Some((from, to)) => self.corpus.range(from, to)?,
            None => self.corpus.full_range(),
        };

        let plan = generator::generate(&self.corpus, &range, &dates);
        info!(
            "Generated plan: {} days over {} verses, target {:.2}/day",
            plan.days.len(),
            range.len(),
            plan.daily_target
        );

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectio_domain::VerseRecord;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn corpus() -> Arc<Corpus> {
        Arc::new(
            Corpus::from_records((1..=4).map(|verse| VerseRecord {
                book_ordinal: 1,
                book_name: "Test".to_string(),
                chapter_num: 1,
                verse_num: verse,
                text_length: 10,
            }))
            .unwrap(),
        )
    }

    #[test]
    fn test_defaults_to_full_span() {
        let use_case = GeneratePlanUseCase::new(corpus());
        let input = GeneratePlanInput::new(date(2026, 1, 1), date(2026, 1, 2));

        let plan = use_case.execute(input).unwrap();
        assert_eq!(plan.total_length, 40);
        assert_eq!(plan.days.len(), 2);
        assert_eq!(plan.days[0].start_verse, VerseRef::new("Test", 1, 1));
        assert_eq!(plan.days[1].end_verse, VerseRef::new("Test", 1, 4));
    }

    #[test]
    fn test_explicit_selection() {
        let use_case = GeneratePlanUseCase::new(corpus());
        let input = GeneratePlanInput::new(date(2026, 1, 1), date(2026, 1, 1))
            .with_range(VerseRef::new("Test", 1, 2), VerseRef::new("Test", 1, 3));

        let plan = use_case.execute(input).unwrap();
        assert_eq!(plan.total_length, 20);
        assert_eq!(plan.days.len(), 1);
        assert_eq!(plan.days[0].start_verse, VerseRef::new("Test", 1, 2));
        assert_eq!(plan.days[0].end_verse, VerseRef::new("Test", 1, 3));
    }

    #[test]
    fn test_inverted_dates_are_rejected() {
        let use_case = GeneratePlanUseCase::new(corpus());
        let input = GeneratePlanInput::new(date(2026, 1, 2), date(2026, 1, 1));

        let error = use_case.execute(input).unwrap_err();
        assert!(matches!(
            error,
            GeneratePlanError::Invalid(DomainError::InvertedDateRange { .. })
        ));
    }

    #[test]
    fn test_unknown_selection_is_rejected() {
        let use_case = GeneratePlanUseCase::new(corpus());
        let input = GeneratePlanInput::new(date(2026, 1, 1), date(2026, 1, 2))
            .with_range(VerseRef::new("Test", 1, 1), VerseRef::new("Mark", 1, 1));

        let error = use_case.execute(input).unwrap_err();
        assert!(matches!(
            error,
            GeneratePlanError::Invalid(DomainError::UnknownVerse(_))
        ));
    }
}
