//! Generated plan entities

use crate::corpus::reference::VerseRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of reading: a contiguous verse span and its accumulated weight
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPlan {
    /// Calendar date of the reading
    pub date: NaiveDate,
    /// First verse of the day (inclusive)
    pub start_verse: VerseRef,
    /// Last verse of the day (inclusive)
    pub end_verse: VerseRef,
    /// Weight actually assigned to this day
    pub length: u64,
}

/// A complete generated schedule
///
/// Replaced wholesale on every generation call. Days are contiguous,
/// weight-balanced and date-ordered; their lengths sum to the total weight
/// of the selected range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingPlan {
    /// Total weight of the selected verse range
    pub total_length: u64,
    /// Weight budget per day before carry-over
    pub daily_target: f64,
    /// The daily readings in date order
    pub days: Vec<DailyPlan>,
}

impl ReadingPlan {
    /// Number of emitted days (may be fewer than the calendar days)
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the plan holds no days
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}
