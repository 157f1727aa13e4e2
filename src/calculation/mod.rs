//! Calculation logic for the Vacation Points Engine.
//!
//! This module contains the month weight table, the day-by-month allocation of a
//! vacation period, period scoring, per-employee aggregation, the ascending-points
//! ranking and the dashboard summary.

mod allocation;
mod dashboard;
mod month_weights;
mod ranking;

pub use allocation::{allocate_days_by_month, score_period};
pub use dashboard::{UPCOMING_VACATION_LIMIT, summarize};
pub use month_weights::{DEFAULT_MONTH_WEIGHTS, MonthWeightEntry, MonthWeightTable, month_name};
pub use ranking::{
    PeriodsByEmployee, aggregate_employee, compute_ranking, group_periods_by_employee,
    month_breakdown, rank_employees,
};
