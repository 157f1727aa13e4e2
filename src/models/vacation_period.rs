//! Vacation period model.
//!
//! This module contains the [`VacationPeriod`] type: an inclusive calendar-date range
//! assigned to one employee.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Default upper bound on the length of a single vacation period, in days.
pub const DEFAULT_MAX_PERIOD_DAYS: i64 = 365;

/// Represents a vacation taken by one employee.
///
/// Both `start_date` and `end_date` are inclusive. The invariant
/// `start_date <= end_date` is enforced by [`VacationPeriod::new`]; the
/// scoring functions assume it holds.
///
/// # Example
///
/// ```
/// use vacation_points::models::VacationPeriod;
/// use chrono::NaiveDate;
///
/// let period = VacationPeriod::new(
///     1,
///     NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
/// )
/// .unwrap();
///
/// assert_eq!(period.day_count(), 7);
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPeriod {
    /// The employee this vacation belongs to.
    pub employee_id: u64,
    /// The first day of vacation (inclusive).
    pub start_date: NaiveDate,
    /// The last day of vacation (inclusive).
    pub end_date: NaiveDate,
}

impl VacationPeriod {
    /// Creates a vacation period, rejecting a start date after the end date.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidPeriod`] if `start_date > end_date`.
    pub fn new(employee_id: u64, start_date: NaiveDate, end_date: NaiveDate) -> EngineResult<Self> {
        let period = Self {
            employee_id,
            start_date,
            end_date,
        };
        period.validate()?;
        Ok(period)
    }

    /// Checks the `start_date <= end_date` invariant.
    pub fn validate(&self) -> EngineResult<()> {
        if self.start_date > self.end_date {
            return Err(EngineError::InvalidPeriod {
                employee_id: self.employee_id,
                start_date: self.start_date,
                end_date: self.end_date,
            });
        }
        Ok(())
    }

    /// Checks the period against a maximum length in days.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::PeriodTooLong`] when the inclusive day count exceeds `max_days`.
    pub fn validate_length(&self, max_days: i64) -> EngineResult<()> {
        let days = self.day_count();
        if days > max_days {
            return Err(EngineError::PeriodTooLong {
                employee_id: self.employee_id,
                days,
                max_days,
            });
        }
        Ok(())
    }

    /// Returns the number of days in the period, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }

    /// Checks if a given date falls within this period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
