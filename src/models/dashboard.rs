//! Dashboard summary models.
//!
//! Counts and upcoming-vacation listings shown on the vacation overview.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A vacation that has not started yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpcomingVacation {
    /// The employee's identifier.
    pub employee_id: u64,
    /// The employee's display name.
    pub employee_name: String,
    /// The first day of vacation.
    pub start_date: NaiveDate,
    /// The last day of vacation.
    pub end_date: NaiveDate,
    /// Days from the reference date until the vacation starts (0 when it starts today).
    pub days_until: i64,
}

/// Overview of the current vacation records relative to a reference date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// The date the summary was computed for.
    pub reference_date: NaiveDate,
    /// Number of employees on record.
    pub total_employees: usize,
    /// Number of vacation periods on record.
    pub total_vacations: usize,
    /// Number of vacation periods that include the reference date.
    pub active_vacations: usize,
    /// The next vacations to start, soonest first.
    pub upcoming_vacations: Vec<UpcomingVacation>,
}
