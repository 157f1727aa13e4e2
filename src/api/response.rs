//! Response types for the Vacation Points Engine API.
//!
//! This module defines the ranking report, the error response structures and
//! the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::{MonthWeightEntry, MonthWeightTable, month_breakdown};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeAggregate, MonthBreakdown, Ranking};

/// One employee's line in a ranking report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEmployee {
    /// The 1-based position in the ranking.
    pub position: usize,
    /// The employee's totals.
    #[serde(flatten)]
    pub aggregate: EmployeeAggregate,
    /// Points per month, in calendar order.
    pub month_breakdown: Vec<MonthBreakdown>,
}

/// The complete response of the `/ranking` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingReport {
    /// Unique identifier for this report.
    pub report_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// The version of the engine that produced the report.
    pub engine_version: String,
    /// The month weight table the ranking was scored with.
    pub month_weights: Vec<MonthWeightEntry>,
    /// Employees ordered ascending by total points.
    pub ranking: Vec<RankedEmployee>,
}

impl RankingReport {
    /// Builds a report from a computed ranking.
    pub fn build(ranking: Ranking, weights: &MonthWeightTable) -> EngineResult<Self> {
        let ranking = ranking
            .into_entries()
            .into_iter()
            .enumerate()
            .map(|(index, aggregate)| {
                Ok(RankedEmployee {
                    position: index + 1,
                    month_breakdown: month_breakdown(&aggregate, weights)?,
                    aggregate,
                })
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            report_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            month_weights: weights.entries(),
            ranking,
        })
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidMonthWeights { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Month weight table is invalid",
                    message,
                ),
            },
            EngineError::UnknownMonth { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CALCULATION_ERROR", "Calculation failed", message),
            },
            EngineError::InvalidPeriod { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_PERIOD",
                    message,
                    "The start date must be on or before the end date",
                ),
            },
            EngineError::PeriodTooLong { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "PERIOD_TOO_LONG",
                    message,
                    "Split long absences into shorter vacation periods",
                ),
            },
            EngineError::UnknownEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "UNKNOWN_EMPLOYEE",
                    message,
                    "Every vacation must reference an employee listed in the request",
                ),
            },
            EngineError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_EMPLOYEE",
                    message,
                    "The employee data contains invalid information",
                ),
            },
            EngineError::InvalidDate { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    message,
                    "Dates must be YYYY-MM-DD or DD/MM/YYYY",
                ),
            },
        }
    }
}
