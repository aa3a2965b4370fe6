//! Payroll breakdown composition.
//!
//! This module composes the individual statutory calculations into the one
//! canonical breakdown function. Every consumer of payroll figures — detail
//! views, registers, remittance schedules — goes through
//! [`calculate_breakdown`] (or a projection of it); the formulas are never
//! duplicated at call sites.

use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{Employee, PayrollBreakdown};

use super::nhf::annual_nhf;
use super::paye::calculate_paye;
use super::pension::annual_pension;
use super::rent_relief::annual_rent_relief;
use super::salary_components::component_amounts;

/// Divisor for deriving monthly figures from annual ones.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the full payroll breakdown for one employee for one month.
///
/// This function is total over the numeric domain: it cannot fail for any
/// finite profile, performs no I/O, and touches no shared mutable state.
/// It does not validate the profile — component shares that do not sum to 1
/// or negative monetary inputs are computed as given, and a net take-home
/// pay below zero is a legitimate result, not an error. Callers that need
/// validation must perform it before invoking the engine.
///
/// The steps, in order:
///
/// 1. Split annual gross into component amounts.
/// 2. Pension: flat rate of gross, always applied.
/// 3. NHF: rate on the basic component, only if elected.
/// 4. Rent relief: rate on annual rent, capped.
/// 5. Taxable income: gross less pre-tax deductions and relief, floored at zero.
/// 6. PAYE: progressive band walk over taxable income.
/// 7. Monthly figures: annual divided by twelve, except the loan deduction,
///    which is already monthly.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_breakdown;
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
/// let breakdown = calculate_breakdown(&employee, &config);
/// assert_eq!(breakdown.total_annual_paye, Decimal::from(981_750));
/// assert_eq!(breakdown.net_take_home_pay, Decimal::from_str("346937.50").unwrap());
/// ```
pub fn calculate_breakdown(employee: &Employee, config: &StatutoryConfig) -> PayrollBreakdown {
    let rates = config.rates();

    let annual_gross = employee.annual_gross_salary;
    let components = component_amounts(annual_gross, &employee.salary_components);

    let annual_pension = annual_pension(annual_gross, rates);
    let annual_nhf = annual_nhf(components.basic, employee.contributes_to_nhf, rates);
    let total_pre_tax_deductions = annual_pension + annual_nhf;

    let rent_relief = annual_rent_relief(employee.annual_rent, rates);

    let annual_taxable_income =
        (annual_gross - total_pre_tax_deductions - rent_relief.relief).max(Decimal::ZERO);

    let paye = calculate_paye(annual_taxable_income, config.tax_schedule());

    let monthly_gross = annual_gross / MONTHS_PER_YEAR;
    let monthly_pension = annual_pension / MONTHS_PER_YEAR;
    let monthly_nhf = annual_nhf / MONTHS_PER_YEAR;
    let monthly_paye = paye.total / MONTHS_PER_YEAR;
    let monthly_loan = employee.monthly_loan();

    let total_monthly_deductions = monthly_pension + monthly_nhf + monthly_paye + monthly_loan;
    let net_take_home_pay = monthly_gross - total_monthly_deductions;

    PayrollBreakdown {
        annual_gross,
        annual_basic: components.basic,
        annual_housing: components.housing,
        annual_transport: components.transport,
        annual_pension,
        annual_nhf,
        total_pre_tax_deductions,
        annual_rent_relief: rent_relief.relief,
        annual_taxable_income,
        tax_bands: paye.bands,
        total_annual_paye: paye.total,
        monthly_gross,
        monthly_basic: components.basic / MONTHS_PER_YEAR,
        monthly_housing: components.housing / MONTHS_PER_YEAR,
        monthly_transport: components.transport / MONTHS_PER_YEAR,
        monthly_pension,
        monthly_nhf,
        monthly_paye,
        monthly_loan,
        total_monthly_deductions,
        net_take_home_pay,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ComponentShares;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_employee() -> Employee {
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
        }
    }

    /// BD-001: full breakdown for a mid-band employee
    ///
    /// Gross 6M, 50/30/20 split, rent 1.2M, NHF elected, 25,000 loan.
    #[test]
    fn test_full_breakdown_mid_band_employee() {
        let config = StatutoryConfig::nigeria_2026();
        let breakdown = calculate_breakdown(&create_test_employee(), &config);

        // Annual layer.
        assert_eq!(breakdown.annual_gross, dec("6000000"));
        assert_eq!(breakdown.annual_basic, dec("3000000"));
        assert_eq!(breakdown.annual_housing, dec("1800000"));
        assert_eq!(breakdown.annual_transport, dec("1200000"));
        assert_eq!(breakdown.annual_pension, dec("480000"));
        assert_eq!(breakdown.annual_nhf, dec("75000"));
        assert_eq!(breakdown.total_pre_tax_deductions, dec("555000"));
        assert_eq!(breakdown.annual_rent_relief, dec("240000"));
        assert_eq!(breakdown.annual_taxable_income, dec("5205000"));
        assert_eq!(breakdown.total_annual_paye, dec("981750"));

        // Per-band trace.
        let amounts: Vec<Decimal> = breakdown.tax_bands.iter().map(|b| b.tax_amount).collect();
        assert_eq!(
            amounts,
            vec![
                Decimal::ZERO,
                dec("210000"),
                dec("700000"),
                dec("71750"),
                Decimal::ZERO
            ]
        );

        // Monthly layer.
        assert_eq!(breakdown.monthly_gross, dec("500000"));
        assert_eq!(breakdown.monthly_basic, dec("250000"));
        assert_eq!(breakdown.monthly_housing, dec("150000"));
        assert_eq!(breakdown.monthly_transport, dec("100000"));
        assert_eq!(breakdown.monthly_pension, dec("40000"));
        assert_eq!(breakdown.monthly_nhf, dec("6250"));
        assert_eq!(breakdown.monthly_paye, dec("81812.50"));
        assert_eq!(breakdown.monthly_loan, dec("25000"));
        assert_eq!(breakdown.total_monthly_deductions, dec("153062.50"));
        assert_eq!(breakdown.net_take_home_pay, dec("346937.50"));
    }

    /// BD-002: monthly PAYE times twelve recovers annual PAYE
    #[test]
    fn test_monthly_paye_times_twelve_is_annual() {
        let config = StatutoryConfig::nigeria_2026();
        let breakdown = calculate_breakdown(&create_test_employee(), &config);

        assert_eq!(
            breakdown.monthly_paye * MONTHS_PER_YEAR,
            breakdown.total_annual_paye
        );
    }

    /// BD-003: zero gross produces an all-zero breakdown without panicking
    #[test]
    fn test_zero_gross_produces_zero_breakdown() {
        let config = StatutoryConfig::nigeria_2026();
        let mut employee = create_test_employee();
        employee.annual_gross_salary = Decimal::ZERO;
        employee.annual_rent = Decimal::ZERO;
        employee.loan_deduction = None;

        let breakdown = calculate_breakdown(&employee, &config);

        assert_eq!(breakdown.annual_basic, Decimal::ZERO);
        assert_eq!(breakdown.annual_pension, Decimal::ZERO);
        assert_eq!(breakdown.annual_nhf, Decimal::ZERO);
        assert_eq!(breakdown.annual_taxable_income, Decimal::ZERO);
        assert_eq!(breakdown.total_annual_paye, Decimal::ZERO);
        assert_eq!(breakdown.monthly_gross, Decimal::ZERO);
        assert_eq!(breakdown.total_monthly_deductions, Decimal::ZERO);
        assert_eq!(breakdown.net_take_home_pay, Decimal::ZERO);
    }

    /// BD-004: an oversized loan drives net pay negative, still a complete result
    #[test]
    fn test_oversized_loan_yields_negative_net_pay() {
        let config = StatutoryConfig::nigeria_2026();
        let employee = Employee {
            id: "EMP009".to_string(),
            first_name: "Bola".to_string(),
            last_name: "Ade".to_string(),
            annual_gross_salary: dec("1200000"),
            salary_components: ComponentShares {
                basic: dec("0.5"),
                housing: dec("0.3"),
                transport: dec("0.2"),
            },
            annual_rent: Decimal::ZERO,
            contributes_to_nhf: false,
            loan_deduction: Some(dec("500000")),
            tin: "99999999-0001".to_string(),
            pfa: "ARM Pension Managers".to_string(),
            rsa_pin: "PEN999999999999".to_string(),
        };

        let breakdown = calculate_breakdown(&employee, &config);

        // Pension 96,000; taxable 1,104,000; PAYE 45,600; monthly PAYE 3,800.
        assert_eq!(breakdown.annual_taxable_income, dec("1104000"));
        assert_eq!(breakdown.total_annual_paye, dec("45600"));
        assert_eq!(breakdown.monthly_gross, dec("100000"));
        assert_eq!(breakdown.total_monthly_deductions, dec("511800"));
        assert_eq!(breakdown.net_take_home_pay, dec("-411800"));
    }

    /// BD-005: opting out of NHF removes the deduction and raises net pay
    #[test]
    fn test_nhf_opt_out_raises_net_pay() {
        let config = StatutoryConfig::nigeria_2026();
        let contributing = create_test_employee();
        let mut opted_out = create_test_employee();
        opted_out.contributes_to_nhf = false;

        let with_nhf = calculate_breakdown(&contributing, &config);
        let without_nhf = calculate_breakdown(&opted_out, &config);

        assert_eq!(without_nhf.annual_nhf, Decimal::ZERO);
        assert!(without_nhf.total_monthly_deductions < with_nhf.total_monthly_deductions);
        assert!(without_nhf.net_take_home_pay > with_nhf.net_take_home_pay);
    }

    /// BD-006: taxable income is floored at zero when reliefs exceed gross
    #[test]
    fn test_taxable_income_floored_at_zero() {
        let config = StatutoryConfig::nigeria_2026();
        let mut employee = create_test_employee();
        // Gross so small that pension plus rent relief exceed it.
        employee.annual_gross_salary = dec("200000");
        employee.annual_rent = dec("2500000");

        let breakdown = calculate_breakdown(&employee, &config);

        assert_eq!(breakdown.annual_taxable_income, Decimal::ZERO);
        assert_eq!(breakdown.total_annual_paye, Decimal::ZERO);
    }

    /// BD-007: identical profiles produce identical breakdowns
    #[test]
    fn test_breakdown_is_deterministic() {
        let config = StatutoryConfig::nigeria_2026();
        let employee = create_test_employee();

        let first = calculate_breakdown(&employee, &config);
        let second = calculate_breakdown(&employee, &config);

        assert_eq!(first, second);
    }

    /// BD-008: component amounts sum to gross when shares sum to one
    #[test]
    fn test_components_sum_to_gross() {
        let config = StatutoryConfig::nigeria_2026();
        let breakdown = calculate_breakdown(&create_test_employee(), &config);

        assert_eq!(
            breakdown.annual_basic + breakdown.annual_housing + breakdown.annual_transport,
            breakdown.annual_gross
        );
    }
}
