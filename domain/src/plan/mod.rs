//! Daily plan generation
//!
//! Partitions a verse range into day-sized chunks across a date range,
//! balancing by verse weight with a running quota and carry-over.

pub mod daily_plan;
pub mod date_range;
pub mod generator;

pub use daily_plan::{DailyPlan, ReadingPlan};
pub use date_range::DateRange;
