//! Roster-level monthly summary projection.
//!
//! Reporting views that only need gross, deductions, and net pay use this
//! three-field projection instead of the full breakdown. It is a pure map
//! over [`calculate_breakdown`](super::calculate_breakdown); no formula
//! lives here.

use crate::config::StatutoryConfig;
use crate::models::{Employee, MonthlySummary};

use super::breakdown::calculate_breakdown;

/// Computes the monthly summary projection for one employee.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::monthly_summary;
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::models::{ComponentShares, Employee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = StatutoryConfig::nigeria_2026();
/// let employee = Employee {
///     id: "EMP001".to_string(),
///     first_name: "Adekunle".to_string(),
///     last_name: "Adebayo".to_string(),
///     annual_gross_salary: Decimal::from(6_000_000),
///     salary_components: ComponentShares {
///         basic: Decimal::from_str("0.5").unwrap(),
///         housing: Decimal::from_str("0.3").unwrap(),
///         transport: Decimal::from_str("0.2").unwrap(),
///     },
///     annual_rent: Decimal::from(1_200_000),
///     contributes_to_nhf: true,
///     loan_deduction: Some(Decimal::from(25_000)),
///     tin: "12345678-0001".to_string(),
///     pfa: "Stanbic IBTC Pension Managers".to_string(),
///     rsa_pin: "PEN123456789012".to_string(),
/// };
///
/// let summary = monthly_summary(&employee, &config);
/// assert_eq!(summary.monthly_gross, Decimal::from(500_000));
/// ```
pub fn monthly_summary(employee: &Employee, config: &StatutoryConfig) -> MonthlySummary {
    let breakdown = calculate_breakdown(employee, config);

    MonthlySummary {
        employee_id: employee.id.clone(),
        monthly_gross: breakdown.monthly_gross,
        total_deductions: breakdown.total_monthly_deductions,
        net_pay: breakdown.net_take_home_pay,
    }
}

/// Computes the monthly summary for every employee in a roster.
///
/// Each employee's computation is independent; order of the output matches
/// the order of the input roster.
pub fn summarize_roster(employees: &[Employee], config: &StatutoryConfig) -> Vec<MonthlySummary> {
    employees
        .iter()
        .map(|employee| monthly_summary(employee, config))
        .collect()
}
