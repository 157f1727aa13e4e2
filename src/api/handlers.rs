//! HTTP request handlers for the Vacation Points Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Local;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{compute_ranking, summarize};
use crate::error::EngineResult;
use crate::models::DashboardSummary;
use crate::store::RecordStore;

use super::request::{DashboardRequest, RecordsRequest, parse_vacation_date};
use super::response::{ApiError, ApiErrorResponse, RankingReport};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/month-weights", get(month_weights_handler))
        .route("/ranking", post(ranking_handler))
        .route("/dashboard", post(dashboard_handler))
        .with_state(state)
}

/// Handler for GET /month-weights.
///
/// Returns the reference table of points per vacation day for each month.
async fn month_weights_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().weights().entries())
}

/// Handler for POST /ranking.
///
/// Accepts employees and vacation periods and returns every employee ranked
/// ascending by accumulated points.
async fn ranking_handler(
    State(state): State<AppState>,
    payload: Result<Json<RecordsRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing ranking request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match perform_ranking(request, &state) {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                employee_count = report.ranking.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Ranking completed successfully"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Ranking failed");
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Handler for POST /dashboard.
///
/// Accepts employees, vacation periods and an optional reference date and
/// returns the vacation overview counts.
async fn dashboard_handler(
    State(state): State<AppState>,
    payload: Result<Json<DashboardRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing dashboard request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match perform_dashboard(request, &state) {
        Ok(summary) => {
            info!(
                correlation_id = %correlation_id,
                active_vacations = summary.active_vacations,
                upcoming_vacations = summary.upcoming_vacations.len(),
                "Dashboard summary completed"
            );
            json_response(StatusCode::OK, summary)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Dashboard failed");
            let api_error: ApiErrorResponse = err.into();
            json_response(api_error.status, api_error.error)
        }
    }
}

/// Validates the records and computes the ranking report.
fn perform_ranking(request: RecordsRequest, state: &AppState) -> EngineResult<RankingReport> {
    let config = state.config();
    let store = request.into_store(config.max_period_days())?;
    let ranking = compute_ranking(&store, config.weights())?;
    RankingReport::build(ranking, config.weights())
}

/// Validates the records and computes the dashboard summary.
fn perform_dashboard(request: DashboardRequest, state: &AppState) -> EngineResult<DashboardSummary> {
    let today = match request.today.as_deref() {
        Some(text) => parse_vacation_date(text)?,
        None => Local::now().date_naive(),
    };

    let store = request.records.into_store(state.config().max_period_days())?;
    let employees = store.list_employees()?;
    let periods = store.list_vacation_periods()?;
    Ok(summarize(&employees, &periods, today))
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn json_response<T: serde::Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
