//! Employee aggregation and ranking.
//!
//! Every query recomputes aggregates from the raw periods; nothing here keeps
//! state between calls.

use std::collections::HashMap;

use tracing::debug;

use crate::error::EngineResult;
use crate::models::{Employee, EmployeeAggregate, MonthBreakdown, Ranking, VacationPeriod};
use crate::store::RecordStore;

use super::allocation::score_period;
use super::month_weights::{MonthWeightTable, month_name};

/// Vacation periods grouped by the id of the employee owning them.
pub type PeriodsByEmployee = HashMap<u64, Vec<VacationPeriod>>;

/// Groups periods by employee id, keeping each employee's periods in input order.
pub fn group_periods_by_employee(periods: &[VacationPeriod]) -> PeriodsByEmployee {
    let mut grouped = PeriodsByEmployee::new();
    for period in periods {
        grouped.entry(period.employee_id).or_default().push(*period);
    }
    grouped
}

/// Sums the scores of all periods belonging to one employee.
///
/// Each period is scored independently. Periods are never merged, so days shared
/// by overlapping periods count once per period.
///
/// # Example
///
/// ```
/// use vacation_points::calculation::{aggregate_employee, MonthWeightTable};
/// use vacation_points::models::{Employee, VacationPeriod};
/// use chrono::NaiveDate;
///
/// let employee = Employee::new(1, "Ana").unwrap();
/// let periods = vec![
///     VacationPeriod::new(1, NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(), NaiveDate::from_ymd_opt(2024, 8, 5).unwrap()).unwrap(),
///     VacationPeriod::new(1, NaiveDate::from_ymd_opt(2024, 8, 10).unwrap(), NaiveDate::from_ymd_opt(2024, 8, 12).unwrap()).unwrap(),
/// ];
///
/// let aggregate = aggregate_employee(&employee, &periods, &MonthWeightTable::default()).unwrap();
/// assert_eq!(aggregate.total_days, 8);
/// assert_eq!(aggregate.total_points, 24);
/// assert_eq!(aggregate.days_by_month.get(&8), Some(&8));
/// ```
pub fn aggregate_employee(
    employee: &Employee,
    periods: &[VacationPeriod],
    weights: &MonthWeightTable,
) -> EngineResult<EmployeeAggregate> {
    let mut aggregate = EmployeeAggregate::empty(employee.id, employee.name.clone());
    for period in periods {
        let score = score_period(period.start_date, period.end_date, weights)?;
        aggregate.absorb(&score);
    }
    Ok(aggregate)
}

/// Builds one aggregate per employee and orders them ascending by total points.
///
/// `employees` must already be in tie-break order (alphabetical by name when it
/// comes from a [`RecordStore`]); the sort is stable. Employees with no periods
/// are ranked with zero points.
pub fn rank_employees(
    employees: &[Employee],
    periods_by_employee: &PeriodsByEmployee,
    weights: &MonthWeightTable,
) -> EngineResult<Ranking> {
    let mut aggregates = Vec::with_capacity(employees.len());
    for employee in employees {
        let periods = periods_by_employee
            .get(&employee.id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        aggregates.push(aggregate_employee(employee, periods, weights)?);
    }

    aggregates.sort_by_key(|aggregate| aggregate.total_points);

    debug!(employee_count = aggregates.len(), "Ranking computed");

    Ok(Ranking::from_sorted(aggregates))
}

/// Reads every record from the store and ranks all employees.
///
/// Periods whose employee is not listed by the store are ignored.
pub fn compute_ranking<S: RecordStore + ?Sized>(
    store: &S,
    weights: &MonthWeightTable,
) -> EngineResult<Ranking> {
    let employees = store.list_employees()?;
    let periods = store.list_vacation_periods()?;
    let grouped = group_periods_by_employee(&periods);
    rank_employees(&employees, &grouped, weights)
}

/// Expands an aggregate's day counts into per-month point lines, in calendar order.
///
/// Months with no vacation days are omitted.
pub fn month_breakdown(
    aggregate: &EmployeeAggregate,
    weights: &MonthWeightTable,
) -> EngineResult<Vec<MonthBreakdown>> {
    aggregate
        .days_by_month
        .iter()
        .map(|(month, days)| {
            let points_per_day = weights.weight(*month)?;
            Ok(MonthBreakdown {
                month: *month,
                month_name: month_name(*month)?.to_string(),
                days: *days,
                points_per_day,
                total_points: u64::from(*days) * u64::from(points_per_day),
            })
        })
        .collect()
}
