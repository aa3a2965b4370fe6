//! HTTP API module for the Payroll Computation Engine.
//!
//! This module provides the REST API endpoints for computing payroll
//! breakdowns and roster-level reports.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, EmployeeRequest, RosterRequest, SalaryComponentsRequest};
pub use response::{
    ApiError, CalculationResult, RegisterResponse, RemittanceResponse, RemittanceScheduleBody,
};
pub use state::AppState;
