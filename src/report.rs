//! Plain-text rendering of rankings and month weight tables.
//!
//! Used by the command-line interface; the HTTP API returns JSON instead.

use std::fmt::Write;

use crate::calculation::{MonthWeightTable, month_breakdown};
use crate::error::EngineResult;
use crate::models::Ranking;

/// Renders a ranking as a text table, one employee per row followed by the
/// months that contributed to their points.
///
/// # Example
///
/// ```
/// use vacation_points::calculation::MonthWeightTable;
/// use vacation_points::models::{EmployeeAggregate, Ranking};
/// use vacation_points::report::render_ranking;
///
/// let ranking = Ranking::from_sorted(vec![EmployeeAggregate::empty(1, "Maria")]);
/// let text = render_ranking(&ranking, &MonthWeightTable::default()).unwrap();
/// assert!(text.contains("Maria"));
/// ```
pub fn render_ranking(ranking: &Ranking, weights: &MonthWeightTable) -> EngineResult<String> {
    let name_width = ranking
        .iter()
        .map(|entry| entry.employee_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Employee".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>3}  {:<name_width$}  {:>5}  {:>7}",
        "#", "Employee", "Days", "Points"
    );

    for (index, entry) in ranking.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}  {:<name_width$}  {:>5}  {:>7}",
            index + 1,
            entry.employee_name,
            entry.total_days,
            entry.total_points
        );
        for line in month_breakdown(entry, weights)? {
            let _ = writeln!(
                out,
                "     {:<name_width$}  {:>3} x {:>2} = {:>5}  {}",
                "", line.days, line.points_per_day, line.total_points, line.month_name
            );
        }
    }

    if ranking.is_empty() {
        out.push_str("(no employees)\n");
    }

    Ok(out)
}

/// Renders the month weight reference table.
pub fn render_weights(weights: &MonthWeightTable) -> String {
    let mut out = String::from("Month       Points/day\n");
    for entry in weights.entries() {
        let _ = writeln!(out, "{:<10}  {:>10}", entry.name, entry.points);
    }
    out
}
