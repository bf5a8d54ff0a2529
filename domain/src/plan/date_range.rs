//! Inclusive calendar date range (Value Object)

use crate::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A validated inclusive `[from, to]` range of calendar dates
///
/// Time-of-day is never involved; the range spans whole days and always
/// counts at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    from: NaiveDate,
    to: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting inverted bounds
    pub fn new(from: NaiveDate, to: NaiveDate) -> Result<Self, DomainError> {
        if to < from {
            return Err(DomainError::InvertedDateRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// A range covering a single day
    pub fn single(date: NaiveDate) -> Self {
        Self {
            from: date,
            to: date,
        }
    }

    /// First day of the range
    pub fn from_date(&self) -> NaiveDate {
        self.from
    }

    /// Last day of the range (inclusive)
    pub fn to_date(&self) -> NaiveDate {
        self.to
    }

    /// Inclusive number of calendar days, at least 1
    pub fn days(&self) -> u32 {
        (self.to - self.from).num_days() as u32 + 1
    }

    /// Dates of the range in calendar order
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> {
        self.from.iter_days().take(self.days() as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inclusive_day_count() {
        let range = DateRange::new(date(2026, 1, 1), date(2026, 1, 2)).unwrap();
        assert_eq!(range.days(), 2);

        let single = DateRange::single(date(2026, 1, 1));
        assert_eq!(single.days(), 1);

        let year = DateRange::new(date(2026, 1, 1), date(2026, 12, 31)).unwrap();
        assert_eq!(year.days(), 365);
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let result = DateRange::new(date(2026, 2, 1), date(2026, 1, 1));
        assert_eq!(
            result.unwrap_err(),
            DomainError::InvertedDateRange {
                from: date(2026, 2, 1),
                to: date(2026, 1, 1),
            }
        );
    }

    #[test]
    fn test_iter_walks_calendar_days() {
        let range = DateRange::new(date(2026, 2, 27), date(2026, 3, 2)).unwrap();
        let dates: Vec<NaiveDate> = range.iter().collect();

        assert_eq!(
            dates,
            vec![
                date(2026, 2, 27),
                date(2026, 2, 28),
                date(2026, 3, 1),
                date(2026, 3, 2),
            ]
        );
    }
}
