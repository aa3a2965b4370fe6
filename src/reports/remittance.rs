//! Statutory remittance schedules.
//!
//! These schedules package the amounts an employer must remit each month to
//! the tax authority (PAYE), the pension fund administrators, and the
//! National Housing Fund, one row per employee with the identifiers each
//! receiving body requires.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_breakdown;
use crate::config::StatutoryConfig;
use crate::models::Employee;

/// One line of the PAYE remittance schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeRemittanceRow {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub employee_name: String,
    /// The employee's tax identification number.
    pub tin: String,
    /// Annual taxable income the tax was assessed on.
    pub annual_taxable_income: Decimal,
    /// Monthly PAYE due for the employee.
    pub monthly_paye: Decimal,
}

/// The PAYE remittance schedule for a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayeRemittanceSchedule {
    /// One row per employee, in roster order.
    pub rows: Vec<PayeRemittanceRow>,
    /// Total monthly PAYE due across the roster.
    pub monthly_total: Decimal,
}

/// One line of the pension remittance schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionRemittanceRow {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub employee_name: String,
    /// The employee's Retirement Savings Account PIN.
    pub rsa_pin: String,
    /// The employee's Pension Fund Administrator.
    pub pfa: String,
    /// Monthly pension contribution for the employee.
    pub monthly_pension: Decimal,
}

/// The pension remittance schedule for a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionRemittanceSchedule {
    /// One row per employee, in roster order.
    pub rows: Vec<PensionRemittanceRow>,
    /// Total monthly pension contribution across the roster.
    pub monthly_total: Decimal,
}

/// One line of the NHF remittance schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NhfRemittanceRow {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub employee_name: String,
    /// Monthly NHF contribution for the employee.
    pub monthly_nhf: Decimal,
}

/// The NHF remittance schedule for a roster.
///
/// Only employees who elected to contribute appear; the schedule is what an
/// employer files with the fund, and non-contributing employees have
/// nothing to remit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NhfRemittanceSchedule {
    /// One row per contributing employee, in roster order.
    pub rows: Vec<NhfRemittanceRow>,
    /// Total monthly NHF contribution across the roster.
    pub monthly_total: Decimal,
}

/// Builds the PAYE remittance schedule for a roster.
pub fn paye_schedule(employees: &[Employee], config: &StatutoryConfig) -> PayeRemittanceSchedule {
    let rows: Vec<PayeRemittanceRow> = employees
        .iter()
        .map(|employee| {
            let breakdown = calculate_breakdown(employee, config);
            PayeRemittanceRow {
                employee_id: employee.id.clone(),
                employee_name: employee.full_name(),
                tin: employee.tin.clone(),
                annual_taxable_income: breakdown.annual_taxable_income,
                monthly_paye: breakdown.monthly_paye,
            }
        })
        .collect();

    let monthly_total = rows.iter().map(|r| r.monthly_paye).sum();

    PayeRemittanceSchedule {
        rows,
        monthly_total,
    }
}

/// Builds the pension remittance schedule for a roster.
pub fn pension_schedule(
    employees: &[Employee],
    config: &StatutoryConfig,
) -> PensionRemittanceSchedule {
    let rows: Vec<PensionRemittanceRow> = employees
        .iter()
        .map(|employee| {
            let breakdown = calculate_breakdown(employee, config);
            PensionRemittanceRow {
                employee_id: employee.id.clone(),
                employee_name: employee.full_name(),
                rsa_pin: employee.rsa_pin.clone(),
                pfa: employee.pfa.clone(),
                monthly_pension: breakdown.monthly_pension,
            }
        })
        .collect();

    let monthly_total = rows.iter().map(|r| r.monthly_pension).sum();

    PensionRemittanceSchedule {
        rows,
        monthly_total,
    }
}

/// Builds the NHF remittance schedule for a roster.
///
/// Employees who did not elect to contribute are skipped entirely rather
/// than listed with a zero amount.
pub fn nhf_schedule(employees: &[Employee], config: &StatutoryConfig) -> NhfRemittanceSchedule {
    let rows: Vec<NhfRemittanceRow> = employees
        .iter()
        .filter(|employee| employee.contributes_to_nhf)
        .map(|employee| {
            let breakdown = calculate_breakdown(employee, config);
            NhfRemittanceRow {
                employee_id: employee.id.clone(),
                employee_name: employee.full_name(),
                monthly_nhf: breakdown.monthly_nhf,
            }
        })
        .collect();

    let monthly_total = rows.iter().map(|r| r.monthly_nhf).sum();

    NhfRemittanceSchedule {
        rows,
        monthly_total,
    }
}
