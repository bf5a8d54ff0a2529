//! Output formatter trait

use lectio_domain::ReadingPlan;

/// Trait for formatting generated reading plans
pub trait OutputFormatter {
    /// Format the complete plan as a human-readable day list
    fn format(&self, plan: &ReadingPlan) -> String;

    /// Format as `date<TAB>start<TAB>end` lines
    fn format_tsv(&self, plan: &ReadingPlan) -> String;

    /// Format as JSON
    fn format_json(&self, plan: &ReadingPlan) -> String;
}
