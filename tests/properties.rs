//! Property tests for the Payroll Computation Engine.
//!
//! These tests exercise the invariants the engine must hold over its whole
//! numeric domain rather than at hand-picked fixtures: component amounts
//! reassemble to gross, PAYE is monotonic in taxable income, the NHF
//! election only ever adds deductions, and the computation is deterministic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use payroll_engine::calculation::{calculate_breakdown, calculate_paye};
use payroll_engine::config::StatutoryConfig;
use payroll_engine::models::{ComponentShares, Employee};

/// First band limit of the 2026 schedule; income at or below it is untaxed.
const ZERO_BAND_LIMIT: u64 = 800_000;

fn employee_with(
    gross: u64,
    basic_pct: u32,
    housing_pct: u32,
    rent: u64,
    nhf: bool,
    loan: u64,
) -> Employee {
    // Shares are integer percentages; transport takes the remainder so the
    // three always sum to exactly 1.
    let transport_pct = 100 - basic_pct - housing_pct;

    Employee {
        id: "EMP-PROP".to_string(),
        first_name: "Prop".to_string(),
        last_name: "Test".to_string(),
        annual_gross_salary: Decimal::from(gross),
        salary_components: ComponentShares {
            basic: Decimal::new(basic_pct as i64, 2),
            housing: Decimal::new(housing_pct as i64, 2),
            transport: Decimal::new(transport_pct as i64, 2),
        },
        annual_rent: Decimal::from(rent),
        contributes_to_nhf: nhf,
        loan_deduction: (loan > 0).then(|| Decimal::from(loan)),
        tin: "00000000-0000".to_string(),
        pfa: "Test PFA".to_string(),
        rsa_pin: "PEN000000000000".to_string(),
    }
}

/// Generates (basic, housing) percentage pairs that leave a non-negative
/// transport remainder.
fn arb_share_split() -> impl Strategy<Value = (u32, u32)> {
    (0u32..=100).prop_flat_map(|basic| (Just(basic), 0u32..=100 - basic))
}

proptest! {
    /// Component amounts reassemble to gross whenever the shares sum to 1.
    #[test]
    fn components_sum_to_gross(
        gross in 0u64..100_000_000,
        (basic, housing) in arb_share_split(),
    ) {
        let config = StatutoryConfig::nigeria_2026();
        let employee = employee_with(gross, basic, housing, 0, false, 0);

        let breakdown = calculate_breakdown(&employee, &config);

        prop_assert_eq!(
            breakdown.annual_basic + breakdown.annual_housing + breakdown.annual_transport,
            breakdown.annual_gross
        );
    }

    /// Raising taxable income never decreases the tax owed.
    #[test]
    fn paye_is_monotonic(a in 0u64..100_000_000, b in 0u64..100_000_000) {
        let config = StatutoryConfig::nigeria_2026();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let tax_low = calculate_paye(Decimal::from(low), config.tax_schedule()).total;
        let tax_high = calculate_paye(Decimal::from(high), config.tax_schedule()).total;

        prop_assert!(tax_low <= tax_high);
    }

    /// Taxable income inside the zero band owes no tax.
    #[test]
    fn paye_is_zero_inside_first_band(income in 0u64..=ZERO_BAND_LIMIT) {
        let config = StatutoryConfig::nigeria_2026();
        let result = calculate_paye(Decimal::from(income), config.tax_schedule());

        prop_assert_eq!(result.total, Decimal::ZERO);
    }

    /// The PAYE trace always has one entry per schedule band, and the
    /// positive portions allocated across bands sum to the taxable income.
    #[test]
    fn paye_trace_is_complete(income in 0u64..100_000_000) {
        let config = StatutoryConfig::nigeria_2026();
        let result = calculate_paye(Decimal::from(income), config.tax_schedule());

        prop_assert_eq!(result.bands.len(), config.tax_schedule().bands().len());

        let allocated: Decimal = result.bands.iter().map(|b| b.taxable_amount).sum();
        prop_assert_eq!(allocated, Decimal::from(income));
    }

    /// Electing NHF never decreases deductions and never increases net pay.
    #[test]
    fn nhf_election_is_monotonic(
        gross in 0u64..100_000_000,
        (basic, housing) in arb_share_split(),
        rent in 0u64..10_000_000,
        loan in 0u64..1_000_000,
    ) {
        let config = StatutoryConfig::nigeria_2026();
        let opted_out = employee_with(gross, basic, housing, rent, false, loan);
        let mut contributing = opted_out.clone();
        contributing.contributes_to_nhf = true;

        let without = calculate_breakdown(&opted_out, &config);
        let with = calculate_breakdown(&contributing, &config);

        prop_assert!(with.total_monthly_deductions >= without.total_monthly_deductions);
        prop_assert!(with.net_take_home_pay <= without.net_take_home_pay);
    }

    /// The computation is a pure function: identical profiles give
    /// identical breakdowns.
    #[test]
    fn breakdown_is_deterministic(
        gross in 0u64..100_000_000,
        (basic, housing) in arb_share_split(),
        rent in 0u64..10_000_000,
        nhf in any::<bool>(),
        loan in 0u64..1_000_000,
    ) {
        let config = StatutoryConfig::nigeria_2026();
        let employee = employee_with(gross, basic, housing, rent, nhf, loan);

        prop_assert_eq!(
            calculate_breakdown(&employee, &config),
            calculate_breakdown(&employee, &config)
        );
    }

    /// Net pay always reconciles against gross and the deduction parts.
    #[test]
    fn deductions_reconcile(
        gross in 0u64..100_000_000,
        (basic, housing) in arb_share_split(),
        rent in 0u64..10_000_000,
        nhf in any::<bool>(),
        loan in 0u64..1_000_000,
    ) {
        let config = StatutoryConfig::nigeria_2026();
        let employee = employee_with(gross, basic, housing, rent, nhf, loan);

        let b = calculate_breakdown(&employee, &config);

        prop_assert_eq!(
            b.total_monthly_deductions,
            b.monthly_pension + b.monthly_nhf + b.monthly_paye + b.monthly_loan
        );
        prop_assert_eq!(b.net_take_home_pay, b.monthly_gross - b.total_monthly_deductions);
        prop_assert_eq!(b.total_pre_tax_deductions, b.annual_pension + b.annual_nhf);
    }
}
