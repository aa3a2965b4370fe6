//! Request types for the Payroll Computation Engine API.
//!
//! This module defines the JSON request structures for the API endpoints.
//! Salary component shares arrive as whole percentages (the encoding used
//! by onboarding forms and CSV imports, e.g. `"50"` for 50%); conversion to
//! the engine's fraction-of-1 encoding happens here, at the boundary, so
//! the engine only ever sees fractions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ComponentShares, Employee};

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee to compute a breakdown for.
    pub employee: EmployeeRequest,
}

/// Request body for the `/register` and `/remittance/:kind` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterRequest {
    /// The roster of employees to report over.
    pub employees: Vec<EmployeeRequest>,
}

/// Salary component shares as whole percentages.
///
/// A value of `50` means 50% of annual gross. The three values should sum
/// to 100; validating that is a form concern, and profiles that do not sum
/// are computed as given.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SalaryComponentsRequest {
    /// Basic salary percentage of annual gross.
    pub basic: Decimal,
    /// Housing allowance percentage of annual gross.
    pub housing: Decimal,
    /// Transport allowance percentage of annual gross.
    pub transport: Decimal,
}

/// Employee information in a calculation or roster request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual gross salary in naira.
    pub annual_gross_salary: Decimal,
    /// Salary component shares as whole percentages.
    pub salary_components: SalaryComponentsRequest,
    /// Annual rent paid.
    pub annual_rent: Decimal,
    /// Whether the employee contributes to the National Housing Fund.
    pub contributes_to_nhf: bool,
    /// Optional fixed monthly loan repayment deduction.
    #[serde(default)]
    pub loan_deduction: Option<Decimal>,
    /// Tax identification number.
    pub tin: String,
    /// Pension Fund Administrator name.
    pub pfa: String,
    /// Retirement Savings Account PIN.
    pub rsa_pin: String,
}

impl From<SalaryComponentsRequest> for ComponentShares {
    fn from(req: SalaryComponentsRequest) -> Self {
        ComponentShares {
            basic: req.basic / Decimal::ONE_HUNDRED,
            housing: req.housing / Decimal::ONE_HUNDRED,
            transport: req.transport / Decimal::ONE_HUNDRED,
        }
    }
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            first_name: req.first_name,
            last_name: req.last_name,
            annual_gross_salary: req.annual_gross_salary,
            salary_components: req.salary_components.into(),
            annual_rent: req.annual_rent,
            contributes_to_nhf: req.contributes_to_nhf,
            loan_deduction: req.loan_deduction,
            tin: req.tin,
            pfa: req.pfa,
            rsa_pin: req.rsa_pin,
        }
    }
}
