//! Monthly payroll register.
//!
//! The register lists every employee's monthly gross, total deductions, and
//! net pay, with column totals across the roster.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::summarize_roster;
use crate::config::StatutoryConfig;
use crate::models::Employee;

/// One register line for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRow {
    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's full name.
    pub employee_name: String,
    /// Monthly gross salary.
    pub monthly_gross: Decimal,
    /// Total monthly deductions.
    pub total_deductions: Decimal,
    /// Net monthly pay.
    pub net_pay: Decimal,
}

/// Column totals across the register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterTotals {
    /// Sum of monthly gross across the roster.
    pub gross: Decimal,
    /// Sum of total deductions across the roster.
    pub deductions: Decimal,
    /// Sum of net pay across the roster.
    pub net: Decimal,
}

/// The monthly payroll register for a roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRegister {
    /// One row per employee, in roster order.
    pub rows: Vec<RegisterRow>,
    /// Column totals.
    pub totals: RegisterTotals,
}

/// Builds the monthly payroll register for a roster.
///
/// Invokes the engine once per employee and sums the three projected
/// columns; no additional payroll logic is applied here.
///
/// # Examples
///
/// ```
/// use payroll_engine::config::StatutoryConfig;
/// use payroll_engine::reports::build_register;
///
/// let config = StatutoryConfig::nigeria_2026();
/// let register = build_register(&[], &config);
/// assert!(register.rows.is_empty());
/// ```
pub fn build_register(employees: &[Employee], config: &StatutoryConfig) -> PayrollRegister {
    let summaries = summarize_roster(employees, config);

    let rows: Vec<RegisterRow> = employees
        .iter()
        .zip(summaries)
        .map(|(employee, summary)| RegisterRow {
            employee_id: employee.id.clone(),
            employee_name: employee.full_name(),
            monthly_gross: summary.monthly_gross,
            total_deductions: summary.total_deductions,
            net_pay: summary.net_pay,
        })
        .collect();

    let totals = RegisterTotals {
        gross: rows.iter().map(|r| r.monthly_gross).sum(),
        deductions: rows.iter().map(|r| r.total_deductions).sum(),
        net: rows.iter().map(|r| r.net_pay).sum(),
    };

    PayrollRegister { rows, totals }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentShares;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_roster() -> Vec<Employee> {
        vec![
            Employee {
                id: "EMP001".to_string(),
                first_name: "Adekunle".to_string(),
                last_name: "Adebayo".to_string(),
                annual_gross_salary: dec("6000000"),
                salary_components: ComponentShares {
                    basic: dec("0.5"),
                    housing: dec("0.3"),
                    transport: dec("0.2"),
                },
                annual_rent: dec("1200000"),
                contributes_to_nhf: true,
                loan_deduction: Some(dec("25000")),
                tin: "12345678-0001".to_string(),
                pfa: "Stanbic IBTC Pension Managers".to_string(),
                rsa_pin: "PEN123456789012".to_string(),
            },
            Employee {
                id: "EMP003".to_string(),
                first_name: "Emeka".to_string(),
                last_name: "Nwosu".to_string(),
                annual_gross_salary: dec("7500000"),
                salary_components: ComponentShares {
                    basic: dec("0.4"),
                    housing: dec("0.35"),
                    transport: dec("0.25"),
                },
                annual_rent: dec("1500000"),
                contributes_to_nhf: false,
                loan_deduction: Some(dec("50000")),
                tin: "34567890-0001".to_string(),
                pfa: "Stanbic IBTC Pension Managers".to_string(),
                rsa_pin: "PEN345678901234".to_string(),
            },
        ]
    }

    /// RG-001: register rows carry identity and the three projected columns
    #[test]
    fn test_register_rows() {
        let config = StatutoryConfig::nigeria_2026();
        let register = build_register(&sample_roster(), &config);

        assert_eq!(register.rows.len(), 2);

        let first = &register.rows[0];
        assert_eq!(first.employee_id, "EMP001");
        assert_eq!(first.employee_name, "Adekunle Adebayo");
        assert_eq!(first.monthly_gross, dec("500000"));
        assert_eq!(first.total_deductions, dec("153062.50"));
        assert_eq!(first.net_pay, dec("346937.50"));

        let second = &register.rows[1];
        assert_eq!(second.employee_id, "EMP003");
        assert_eq!(second.monthly_gross, dec("625000"));
        assert_eq!(second.total_deductions, dec("222500"));
        assert_eq!(second.net_pay, dec("402500"));
    }

    /// RG-002: totals sum the three columns
    #[test]
    fn test_register_totals() {
        let config = StatutoryConfig::nigeria_2026();
        let register = build_register(&sample_roster(), &config);

        assert_eq!(register.totals.gross, dec("1125000"));
        assert_eq!(register.totals.deductions, dec("375562.50"));
        assert_eq!(register.totals.net, dec("749437.50"));
    }

    /// RG-003: totals reconcile with the rows
    #[test]
    fn test_totals_reconcile_with_rows() {
        let config = StatutoryConfig::nigeria_2026();
        let register = build_register(&sample_roster(), &config);

        let gross: Decimal = register.rows.iter().map(|r| r.monthly_gross).sum();
        let net: Decimal = register.rows.iter().map(|r| r.net_pay).sum();

        assert_eq!(register.totals.gross, gross);
        assert_eq!(register.totals.net, net);
    }

    /// RG-004: empty roster yields empty rows and zero totals
    #[test]
    fn test_empty_roster() {
        let config = StatutoryConfig::nigeria_2026();
        let register = build_register(&[], &config);

        assert!(register.rows.is_empty());
        assert_eq!(register.totals.gross, Decimal::ZERO);
        assert_eq!(register.totals.deductions, Decimal::ZERO);
        assert_eq!(register.totals.net, Decimal::ZERO);
    }

    /// RG-005: register serializes for report rendering
    #[test]
    fn test_register_serialization() {
        let config = StatutoryConfig::nigeria_2026();
        let register = build_register(&sample_roster(), &config);

        let json = serde_json::to_string(&register).unwrap();
        assert!(json.contains("\"rows\":["));
        assert!(json.contains("\"employee_name\":\"Adekunle Adebayo\""));
        assert!(json.contains("\"totals\":{"));
    }
}
