//! Dashboard summary calculation.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DashboardSummary, Employee, UpcomingVacation, VacationPeriod};

/// Maximum number of upcoming vacations listed on the dashboard.
pub const UPCOMING_VACATION_LIMIT: usize = 5;

/// Summarizes vacation records relative to `today`.
///
/// Periods owned by employees missing from `employees` are left out of every count.
/// A period is active when `start_date <= today <= end_date` and upcoming when
/// `start_date >= today`, so a vacation starting today is both. Upcoming
/// vacations are ordered by start date, then employee name.
///
/// # Example
///
/// ```
/// use vacation_points::calculation::summarize;
/// use vacation_points::models::{Employee, VacationPeriod};
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 8, 3).unwrap();
/// let employees = vec![Employee::new(1, "Ana").unwrap()];
/// let periods = vec![VacationPeriod::new(
///     1,
///     NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
/// )
/// .unwrap()];
///
/// let summary = summarize(&employees, &periods, today);
/// assert_eq!(summary.active_vacations, 1);
/// assert!(summary.upcoming_vacations.is_empty());
/// ```
pub fn summarize(
    employees: &[Employee],
    periods: &[VacationPeriod],
    today: NaiveDate,
) -> DashboardSummary {
    let names: HashMap<u64, &str> = employees
        .iter()
        .map(|e| (e.id, e.name.as_str()))
        .collect();

    let known: Vec<(&VacationPeriod, &str)> = periods
        .iter()
        .filter_map(|p| names.get(&p.employee_id).map(|name| (p, *name)))
        .collect();

    let active_vacations = known.iter().filter(|(p, _)| p.contains_date(today)).count();

    let mut upcoming: Vec<(&VacationPeriod, &str)> = known
        .iter()
        .filter(|(p, _)| p.start_date >= today)
        .copied()
        .collect();
    upcoming.sort_by(|(a, a_name), (b, b_name)| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| a_name.cmp(b_name))
    });

    let upcoming_vacations = upcoming
        .into_iter()
        .take(UPCOMING_VACATION_LIMIT)
        .map(|(period, name)| UpcomingVacation {
            employee_id: period.employee_id,
            employee_name: name.to_string(),
            start_date: period.start_date,
            end_date: period.end_date,
            days_until: (period.start_date - today).num_days(),
        })
        .collect();

    DashboardSummary {
        reference_date: today,
        total_employees: employees.len(),
        total_vacations: known.len(),
        active_vacations,
        upcoming_vacations,
    }
}
