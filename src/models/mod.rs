//! Core data models for the Vacation Points Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod dashboard;
mod employee;
mod ranking;
mod vacation_period;

pub use dashboard::{DashboardSummary, UpcomingVacation};
pub use employee::Employee;
pub use ranking::{DaysByMonth, EmployeeAggregate, MonthBreakdown, PeriodScore, Ranking};
pub use vacation_period::{DEFAULT_MAX_PERIOD_DAYS, VacationPeriod};
