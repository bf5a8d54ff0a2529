//! Console output formatter for reading plans

use colored::Colorize;
use lectio_domain::ReadingPlan;

/// Formats reading plans for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete plan as a colored day list
    pub fn format(plan: &ReadingPlan) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Daily Reading Plan ===".cyan().bold()
        ));
        output.push_str(&format!(
            "{} {} days, total length {}, target {:.1} per day\n\n",
            "Summary:".cyan().bold(),
            plan.days.len(),
            plan.total_length,
            plan.daily_target
        ));

        for day in &plan.days {
            output.push_str(&format!(
                "{}  {} - {}  {}\n",
                day.date.to_string().yellow(),
                day.start_verse,
                day.end_verse,
                format!("({})", day.length).dimmed()
            ));
        }

        output
    }

    /// Format as `date<TAB>start<TAB>end` lines
    pub fn format_tsv(plan: &ReadingPlan) -> String {
        plan.days
            .iter()
            .map(|day| format!("{}\t{}\t{}", day.date, day.start_verse, day.end_verse))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Format as JSON
    pub fn format_json(plan: &ReadingPlan) -> String {
        serde_json::to_string_pretty(plan).unwrap_or_else(|_| "{}".to_string())
    }
}
