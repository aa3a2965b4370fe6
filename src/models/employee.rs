//! Employee model and related types.
//!
//! This module defines the Employee struct and the salary component shares
//! that drive the payroll calculation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Salary component shares, each expressed as a fraction of 1.
///
/// A value of `0.5` means 50% of annual gross. The three shares are expected
/// to sum to 1, but the engine does not enforce this: each component amount
/// is computed independently as `gross * share`, and validating the sum is a
/// concern of the layer that captures the data. Percentage-encoded inputs
/// (e.g. `50` for 50%) must be converted to fractions before they reach the
/// engine; the API request types perform that conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentShares {
    /// Basic salary share of annual gross.
    pub basic: Decimal,
    /// Housing allowance share of annual gross.
    pub housing: Decimal,
    /// Transport allowance share of annual gross.
    pub transport: Decimal,
}

/// Represents an employee subject to payroll computation.
///
/// Carries the compensation profile the engine consumes plus the statutory
/// identifiers (TIN, PFA, RSA PIN) that the remittance schedules report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "EMP001").
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual gross salary in naira.
    pub annual_gross_salary: Decimal,
    /// How the gross splits into basic, housing, and transport.
    pub salary_components: ComponentShares,
    /// Annual rent paid, used only for rent relief.
    pub annual_rent: Decimal,
    /// Whether the employee elected to contribute to the National Housing Fund.
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

impl Employee {
    /// Returns the employee's full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the monthly loan deduction, zero when none is set.
    ///
    /// The loan figure is already monthly; it is never derived from an
    /// annual amount.
    pub fn monthly_loan(&self) -> Decimal {
        self.loan_deduction.unwrap_or(Decimal::ZERO)
    }
}
