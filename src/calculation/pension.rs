//! Pension contribution calculation.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;

/// Computes the annual pension contribution.
///
/// The pension contribution is a flat percentage of annual gross salary
/// (8% under the Nigeria 2026 schedule) and is always applied; unlike NHF
/// it is not contingent on any election.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::annual_pension;
/// use payroll_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::nigeria_2026();
/// let pension = annual_pension(Decimal::from(6_000_000), config.rates());
/// assert_eq!(pension, Decimal::from(480_000));
/// ```
pub fn annual_pension(annual_gross: Decimal, rates: &StatutoryRates) -> Decimal {
    annual_gross * rates.pension_rate
}
