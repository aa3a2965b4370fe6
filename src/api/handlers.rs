//! HTTP request handlers for the Payroll Computation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_breakdown;
use crate::models::Employee;
use crate::reports::{build_register, nhf_schedule, paye_schedule, pension_schedule};

use super::request::{CalculationRequest, RosterRequest};
use super::response::{
    ApiError, CalculationResult, RegisterResponse, RemittanceResponse, RemittanceScheduleBody,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/register", post(register_handler))
        .route("/remittance/:kind", post(remittance_handler))
        .with_state(state)
}

/// Converts a JSON extraction rejection into an API error body.
fn rejection_to_error(rejection: JsonRejection, correlation_id: Uuid) -> ApiError {
    match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde.
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
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
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

/// Builds a 400 response from an API error body.
fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

/// Handler for POST /calculate.
///
/// Computes the full payroll breakdown for one employee.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let employee: Employee = request.employee.into();
    let breakdown = calculate_breakdown(&employee, state.config());

    info!(
        correlation_id = %correlation_id,
        employee_id = %employee.id,
        net_take_home_pay = %breakdown.net_take_home_pay,
        "Calculation completed successfully"
    );

    let result = CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id,
        breakdown,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(result),
    )
        .into_response()
}

/// Handler for POST /register.
///
/// Builds the monthly payroll register for a roster.
async fn register_handler(
    State(state): State<AppState>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing register request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Employee::from).collect();
    let register = build_register(&employees, state.config());

    info!(
        correlation_id = %correlation_id,
        employee_count = employees.len(),
        total_net = %register.totals.net,
        "Register computed successfully"
    );

    let response = RegisterResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_count: employees.len(),
        register,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}

/// Handler for POST /remittance/:kind.
///
/// Builds the PAYE, pension, or NHF remittance schedule for a roster.
async fn remittance_handler(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    payload: Result<Json<RosterRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, kind = %kind, "Processing remittance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_request(rejection_to_error(rejection, correlation_id)),
    };

    let employees: Vec<Employee> = request.employees.into_iter().map(Employee::from).collect();
    let config = state.config();

    let schedule = match kind.as_str() {
        "paye" => RemittanceScheduleBody::Paye(paye_schedule(&employees, config)),
        "pension" => RemittanceScheduleBody::Pension(pension_schedule(&employees, config)),
        "nhf" => RemittanceScheduleBody::Nhf(nhf_schedule(&employees, config)),
        other => {
            warn!(correlation_id = %correlation_id, kind = %other, "Unknown remittance kind");
            return bad_request(ApiError::unknown_remittance_kind(other));
        }
    };

    info!(
        correlation_id = %correlation_id,
        kind = %kind,
        employee_count = employees.len(),
        "Remittance schedule computed successfully"
    );

    let response = RemittanceResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        kind,
        schedule,
    };

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(response),
    )
        .into_response()
}
