//! Error types for the Vacation Points Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur at the engine's input boundary.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Vacation Points Engine.
///
/// The scoring core itself is total over well-formed input; every variant here
/// is raised while loading configuration or validating records before they
/// reach the engine.
///
/// # Example
///
/// ```
/// use vacation_points::error::EngineError;
///
/// let error = EngineError::UnknownMonth { month: 13 };
/// assert_eq!(error.to_string(), "Unknown month: 13 (expected 1-12)");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The month weight table is incomplete or contains invalid weights.
    #[error("Invalid month weight table: {message}")]
    InvalidMonthWeights {
        /// A description of what is wrong with the table.
        message: String,
    },

    /// A month number outside 1-12 reached the weight lookup.
    #[error("Unknown month: {month} (expected 1-12)")]
    UnknownMonth {
        /// The offending month number.
        month: u32,
    },

    /// A vacation period ends before it starts.
    #[error("Invalid vacation period for employee {employee_id}: start {start_date} is after end {end_date}")]
    InvalidPeriod {
        /// The employee owning the period.
        employee_id: u64,
        /// The first day of the period.
        start_date: NaiveDate,
        /// The last day of the period.
        end_date: NaiveDate,
    },

    /// A vacation period is longer than the boundary policy allows.
    #[error("Vacation period for employee {employee_id} spans {days} days (maximum {max_days})")]
    PeriodTooLong {
        /// The employee owning the period.
        employee_id: u64,
        /// The number of days in the period.
        days: i64,
        /// The maximum number of days allowed.
        max_days: i64,
    },

    /// A vacation period references an employee that does not exist.
    #[error("Unknown employee: {employee_id}")]
    UnknownEmployee {
        /// The referenced employee id.
        employee_id: u64,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A date string could not be parsed.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/policy.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/policy.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_invalid_period_displays_dates() {
        let error = EngineError::InvalidPeriod {
            employee_id: 7,
            start_date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid vacation period for employee 7: start 2024-03-10 is after end 2024-03-01"
        );
    }

    #[test]
    fn test_period_too_long_displays_limit() {
        let error = EngineError::PeriodTooLong {
            employee_id: 3,
            days: 400,
            max_days: 365,
        };
        assert_eq!(
            error.to_string(),
            "Vacation period for employee 3 spans 400 days (maximum 365)"
        );
    }

    #[test]
    fn test_unknown_employee_displays_id() {
        let error = EngineError::UnknownEmployee { employee_id: 42 };
        assert_eq!(error.to_string(), "Unknown employee: 42");
    }

    #[test]
    fn test_invalid_employee_displays_field_and_message() {
        let error = EngineError::InvalidEmployee {
            field: "name".to_string(),
            message: "must not be blank".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee field 'name': must not be blank"
        );
    }

    #[test]
    fn test_invalid_date_displays_value() {
        let error = EngineError::InvalidDate {
            value: "31/02/2024".to_string(),
            message: "input is out of range".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid date '31/02/2024': input is out of range"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_unknown_month() -> EngineResult<()> {
            Err(EngineError::UnknownMonth { month: 0 })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_unknown_month()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
