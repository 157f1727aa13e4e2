//! Ranking result models for the Vacation Points Engine.
//!
//! This module contains the [`EmployeeAggregate`] and [`Ranking`] types produced
//! by the ranking engine, along with the per-period [`PeriodScore`] and the
//! display-oriented [`MonthBreakdown`]. All of them are derived values,
//! recomputed on every query.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Vacation day counts keyed by month number (1-12).
///
/// A `BTreeMap` keeps the months in calendar order when iterated or serialized.
pub type DaysByMonth = BTreeMap<u32, u32>;

/// The score of a single vacation period.
///
/// # Example
///
/// ```
/// use vacation_points::models::{DaysByMonth, PeriodScore};
///
/// let score = PeriodScore {
///     total_points: 77,
///     total_days: 7,
///     days_by_month: DaysByMonth::from([(1, 4), (2, 3)]),
/// };
/// assert_eq!(score.days_by_month.values().sum::<u32>(), score.total_days);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodScore {
    /// Sum of day count times month weight across all months touched.
    pub total_points: u64,
    /// Number of days in the period (inclusive of both ends).
    pub total_days: u32,
    /// Day count per month.
    pub days_by_month: DaysByMonth,
}

/// Accumulated vacation totals for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeAggregate {
    /// The employee's identifier.
    pub employee_id: u64,
    /// The employee's display name.
    pub employee_name: String,
    /// Points summed across all of the employee's periods.
    pub total_points: u64,
    /// Days summed across all of the employee's periods.
    pub total_days: u32,
    /// Element-wise sum of every period's day counts per month.
    pub days_by_month: DaysByMonth,
}

impl EmployeeAggregate {
    /// Creates an aggregate with no vacation days.
    pub fn empty(employee_id: u64, employee_name: impl Into<String>) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.into(),
            total_points: 0,
            total_days: 0,
            days_by_month: DaysByMonth::new(),
        }
    }

    /// Folds a period score into this aggregate.
    ///
    /// Overlapping periods are not deduplicated: every call adds the full score.
    pub fn absorb(&mut self, score: &PeriodScore) {
        self.total_points += score.total_points;
        self.total_days += score.total_days;
        for (month, days) in &score.days_by_month {
            *self.days_by_month.entry(*month).or_insert(0) += days;
        }
    }
}

/// One month's line in an employee's points breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthBreakdown {
    /// The month number (1-12).
    pub month: u32,
    /// The month's English name (e.g., "January").
    pub month_name: String,
    /// Vacation days spent in this month.
    pub days: u32,
    /// The month's weight.
    pub points_per_day: u32,
    /// `days * points_per_day`.
    pub total_points: u64,
}

/// Employees ordered ascending by total points.
///
/// Ties keep the order in which employees were supplied (alphabetical by name
/// from the record store).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<EmployeeAggregate>,
}

impl Ranking {
    /// Creates a ranking from aggregates that are already in ranked order.
    pub fn from_sorted(entries: Vec<EmployeeAggregate>) -> Self {
        Self { entries }
    }

    /// Returns the ranked aggregates.
    pub fn entries(&self) -> &[EmployeeAggregate] {
        &self.entries
    }

    /// Iterates over the ranked aggregates, lowest points first.
    pub fn iter(&self) -> std::slice::Iter<'_, EmployeeAggregate> {
        self.entries.iter()
    }

    /// Returns the number of ranked employees.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no employees were ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the 1-based position of an employee, if ranked.
    pub fn position_of(&self, employee_id: u64) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.employee_id == employee_id)
            .map(|i| i + 1)
    }

    /// Consumes the ranking and returns its aggregates.
    pub fn into_entries(self) -> Vec<EmployeeAggregate> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a EmployeeAggregate;
    type IntoIter = std::slice::Iter<'a, EmployeeAggregate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
