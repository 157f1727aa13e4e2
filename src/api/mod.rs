//! HTTP API module for the Vacation Points Engine.
//!
//! This module provides the REST API endpoints for the month weight table,
//! the employee ranking and the vacation dashboard.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    DashboardRequest, EmployeeRequest, RecordsRequest, VacationRequest, parse_vacation_date,
};
pub use response::{ApiError, ApiErrorResponse, RankedEmployee, RankingReport};
pub use state::AppState;
