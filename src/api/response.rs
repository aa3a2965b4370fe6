//! Response types for the Payroll Computation Engine API.
//!
//! This module defines the result envelopes returned by the endpoints and
//! the error response structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::PayrollBreakdown;
use crate::reports::{
    NhfRemittanceSchedule, PayeRemittanceSchedule, PayrollRegister, PensionRemittanceSchedule,
};

/// The result envelope for a single-employee calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the calculation is for.
    pub employee_id: String,
    /// The full payroll breakdown.
    pub breakdown: PayrollBreakdown,
}

/// The result envelope for a roster register computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterResponse {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// Number of employees in the roster.
    pub employee_count: usize,
    /// The payroll register.
    pub register: PayrollRegister,
}

/// The remittance schedule carried in a [`RemittanceResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RemittanceScheduleBody {
    /// PAYE tax remittance schedule.
    Paye(PayeRemittanceSchedule),
    /// Pension remittance schedule.
    Pension(PensionRemittanceSchedule),
    /// NHF remittance schedule.
    Nhf(NhfRemittanceSchedule),
}

/// The result envelope for a remittance schedule computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemittanceResponse {
    /// Unique identifier for this computation.
    pub calculation_id: Uuid,
    /// When the computation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the computation.
    pub engine_version: String,
    /// The schedule kind ("paye", "pension", or "nhf").
    pub kind: String,
    /// The remittance schedule.
    pub schedule: RemittanceScheduleBody,
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

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// Creates an unknown remittance kind error response.
    pub fn unknown_remittance_kind(kind: &str) -> Self {
        Self::with_details(
            "UNKNOWN_REMITTANCE_KIND",
            format!("Unknown remittance kind: {}", kind),
            "Supported kinds are 'paye', 'pension', and 'nhf'",
        )
    }
}
