//! Request types for the Vacation Points Engine API.
//!
//! This module defines the JSON request structures for the `/ranking` and
//! `/dashboard` endpoints and converts them into validated domain records.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, VacationPeriod};
use crate::store::InMemoryRecordStore;

/// Employee and vacation records supplied by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordsRequest {
    /// The employees to rank.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
    /// The vacation periods taken by those employees.
    #[serde(default)]
    pub vacations: Vec<VacationRequest>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: u64,
    /// The employee's display name.
    pub name: String,
}

/// Vacation period information in a request.
///
/// Dates are text so both `YYYY-MM-DD` and `DD/MM/YYYY` are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRequest {
    /// The employee taking the vacation.
    pub employee_id: u64,
    /// The first day of vacation.
    pub start_date: String,
    /// The last day of vacation.
    pub end_date: String,
}

/// Request body for the `/dashboard` endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardRequest {
    /// The records to summarize.
    #[serde(flatten)]
    pub records: RecordsRequest,
    /// Reference date; the server's local date when omitted.
    #[serde(default)]
    pub today: Option<String>,
}

/// Parses a vacation date in `DD/MM/YYYY` (when the text contains `/`) or `YYYY-MM-DD`.
///
/// # Example
///
/// ```
/// use vacation_points::api::parse_vacation_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 1, 28).unwrap();
/// assert_eq!(parse_vacation_date("28/01/2024").unwrap(), expected);
/// assert_eq!(parse_vacation_date("2024-01-28").unwrap(), expected);
/// assert!(parse_vacation_date("2024/13/01").is_err());
/// ```
pub fn parse_vacation_date(value: &str) -> EngineResult<NaiveDate> {
    let value = value.trim();
    let format = if value.contains('/') {
        "%d/%m/%Y"
    } else {
        "%Y-%m-%d"
    };

    NaiveDate::parse_from_str(value, format).map_err(|e| EngineError::InvalidDate {
        value: value.to_string(),
        message: e.to_string(),
    })
}

impl EmployeeRequest {
    /// Converts into a validated employee.
    pub fn into_employee(self) -> EngineResult<Employee> {
        Employee::new(self.id, &self.name)
    }
}

impl VacationRequest {
    /// Parses the dates and converts into a validated vacation period.
    pub fn into_period(self) -> EngineResult<VacationPeriod> {
        let start_date = parse_vacation_date(&self.start_date)?;
        let end_date = parse_vacation_date(&self.end_date)?;
        VacationPeriod::new(self.employee_id, start_date, end_date)
    }
}

impl RecordsRequest {
    /// Validates every record and builds a record store from them.
    pub fn into_store(self, max_period_days: i64) -> EngineResult<InMemoryRecordStore> {
        let employees = self
            .employees
            .into_iter()
            .map(EmployeeRequest::into_employee)
            .collect::<EngineResult<Vec<_>>>()?;
        let periods = self
            .vacations
            .into_iter()
            .map(VacationRequest::into_period)
            .collect::<EngineResult<Vec<_>>>()?;

        InMemoryRecordStore::new(employees, periods, max_period_days)
    }
}
