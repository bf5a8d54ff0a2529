//! Daily plan generator
//!
//! Walks the selected verse range once with a running weight quota. A day
//! closes when the quota is spent; its overshoot (or shortfall) carries
//! into the next day's budget rather than resetting, so the emitted day
//! lengths always sum to the range total.

use crate::corpus::catalog::{Corpus, VerseRange};
use crate::plan::daily_plan::{DailyPlan, ReadingPlan};
use crate::plan::date_range::DateRange;

/// Partition `range` into daily readings across `dates`
///
/// The walk keeps a `quota` initialized to `total / days`:
///
/// 1. the first verse after a closure opens a new day;
/// 2. each verse subtracts its weight from the quota and adds it to the
///    open day;
/// 3. the day closes when the quota drops to zero or below, or on the
///    final verse of the range (forced closure, so the last partial day is
///    never dropped);
/// 4. closure replenishes the quota by one more daily target and advances
///    one calendar date.
///
/// Fewer days than the calendar range holds is legal; trailing dates are
/// simply never emitted. The range and dates are validated value objects,
/// so the walk itself cannot fail.
pub fn generate(corpus: &Corpus, range: &VerseRange, dates: &DateRange) -> ReadingPlan {
    let total_length: u64 = corpus
        .verses_between(range)
        .map(|verse| u64::from(verse.text_length))
        .sum();
    let daily_target = total_length as f64 / f64::from(dates.days());

    let mut days = Vec::new();
    let mut quota = daily_target;
    let mut date = dates.from_date();
    let mut start = None;
    let mut length = 0u64;

    for verse in corpus.verses_between(range) {
        let start_id = *start.get_or_insert(verse.id);
        quota -= f64::from(verse.text_length);
        length += u64::from(verse.text_length);

        if quota <= 0.0 || verse.id == range.to() {
            days.push(DailyPlan {
                date,
                start_verse: corpus.verse_ref(start_id).expect("range verse is in corpus"),
                end_verse: corpus.verse_ref(verse.id).expect("range verse is in corpus"),
                length,
            });
            quota += daily_target;
            start = None;
            length = 0;
            date = date.succ_opt().unwrap_or(date);
        }
    }

    ReadingPlan {
        total_length,
        daily_target,
        days,
    }
}
