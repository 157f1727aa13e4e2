//! Day-by-month allocation and period scoring.
//!
//! A vacation period is walked one real calendar day at a time, so month ends,
//! leap days and year boundaries need no special handling.

use chrono::{Datelike, NaiveDate};

use crate::error::EngineResult;
use crate::models::{DaysByMonth, PeriodScore};

use super::month_weights::MonthWeightTable;

/// Counts the days of an inclusive date range per calendar month.
///
/// The caller guarantees `start_date <= end_date`; an inverted range yields an
/// empty map. The counts always sum to `(end_date - start_date).num_days() + 1`.
///
/// # Example
///
/// ```
/// use vacation_points::calculation::allocate_days_by_month;
/// use chrono::NaiveDate;
///
/// // 30/12/2023 to 02/01/2024 crosses a year boundary
/// let days = allocate_days_by_month(
///     NaiveDate::from_ymd_opt(2023, 12, 30).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
/// );
/// assert_eq!(days.get(&12), Some(&2));
/// assert_eq!(days.get(&1), Some(&2));
/// ```
pub fn allocate_days_by_month(start_date: NaiveDate, end_date: NaiveDate) -> DaysByMonth {
    let mut days_by_month = DaysByMonth::new();
    for day in start_date.iter_days().take_while(|day| *day <= end_date) {
        *days_by_month.entry(day.month()).or_insert(0) += 1;
    }
    days_by_month
}

/// Scores an inclusive date range against a month weight table.
///
/// `total_points` is the sum of `day_count * weight(month)` over every month the
/// range touches. Integer arithmetic throughout.
///
/// # Errors
///
/// Only [`crate::error::EngineError::UnknownMonth`], which cannot occur for months
/// produced by [`allocate_days_by_month`].
///
/// # Example
///
/// ```
/// use vacation_points::calculation::{score_period, MonthWeightTable};
/// use chrono::NaiveDate;
///
/// let score = score_period(
///     NaiveDate::from_ymd_opt(2024, 1, 28).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 3).unwrap(),
///     &MonthWeightTable::default(),
/// )
/// .unwrap();
///
/// assert_eq!(score.total_points, 77); // 4 * 11 + 3 * 11
/// assert_eq!(score.total_days, 7);
/// ```
pub fn score_period(
    start_date: NaiveDate,
    end_date: NaiveDate,
    weights: &MonthWeightTable,
) -> EngineResult<PeriodScore> {
    let days_by_month = allocate_days_by_month(start_date, end_date);

    let mut total_points: u64 = 0;
    for (month, days) in &days_by_month {
        total_points += u64::from(*days) * u64::from(weights.weight(*month)?);
    }

    Ok(PeriodScore {
        total_points,
        total_days: days_by_month.values().sum(),
        days_by_month,
    })
}
