//! Record store boundary.
//!
//! The engine does not own persistence. It reads employees and vacation periods
//! through the [`RecordStore`] trait; [`InMemoryRecordStore`] is the in-process
//! implementation used by the HTTP API, the CLI and the tests. Its constructor is
//! the input boundary where malformed records are rejected.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, VacationPeriod};

/// Source of the records the ranking engine consumes.
pub trait RecordStore: Send + Sync {
    /// Returns every employee, ordered alphabetically by name.
    fn list_employees(&self) -> EngineResult<Vec<Employee>>;

    /// Returns every vacation period.
    fn list_vacation_periods(&self) -> EngineResult<Vec<VacationPeriod>>;
}

/// A validated, immutable snapshot of employees and their vacation periods.
///
/// # Example
///
/// ```
/// use vacation_points::models::{Employee, VacationPeriod};
/// use vacation_points::store::{InMemoryRecordStore, RecordStore};
/// use chrono::NaiveDate;
///
/// let store = InMemoryRecordStore::new(
///     vec![Employee::new(1, "Zoe").unwrap(), Employee::new(2, "Ana").unwrap()],
///     vec![VacationPeriod::new(
///         1,
///         NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2024, 8, 5).unwrap(),
///     )
///     .unwrap()],
///     365,
/// )
/// .unwrap();
///
/// let names: Vec<String> = store.list_employees().unwrap().into_iter().map(|e| e.name).collect();
/// assert_eq!(names, vec!["Ana", "Zoe"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    employees: Vec<Employee>,
    periods: Vec<VacationPeriod>,
}

impl InMemoryRecordStore {
    /// Builds a store after validating every record.
    ///
    /// Employees are sorted by name (stable, so equal names keep their input order).
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidEmployee`] for a blank name or a duplicate id
    /// - [`EngineError::InvalidPeriod`] for a period whose start is after its end
    /// - [`EngineError::PeriodTooLong`] for a period longer than `max_period_days`
    /// - [`EngineError::UnknownEmployee`] for a period owned by an unlisted employee
    pub fn new(
        employees: Vec<Employee>,
        periods: Vec<VacationPeriod>,
        max_period_days: i64,
    ) -> EngineResult<Self> {
        let mut seen = HashSet::with_capacity(employees.len());
        let mut validated = Vec::with_capacity(employees.len());
        for employee in employees {
            if !seen.insert(employee.id) {
                return Err(EngineError::InvalidEmployee {
                    field: "id".to_string(),
                    message: format!("duplicate employee id {}", employee.id),
                });
            }
            validated.push(Employee::new(employee.id, &employee.name)?);
        }
        validated.sort_by(|a, b| a.name.cmp(&b.name));

        for period in &periods {
            period.validate()?;
            period.validate_length(max_period_days)?;
            if !seen.contains(&period.employee_id) {
                return Err(EngineError::UnknownEmployee {
                    employee_id: period.employee_id,
                });
            }
        }

        debug!(
            employee_count = validated.len(),
            period_count = periods.len(),
            "Record store validated"
        );

        Ok(Self {
            employees: validated,
            periods,
        })
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        Ok(self.employees.clone())
    }

    fn list_vacation_periods(&self) -> EngineResult<Vec<VacationPeriod>> {
        Ok(self.periods.clone())
    }
}
