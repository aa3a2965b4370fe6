//! National Housing Fund contribution calculation.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;

/// Computes the annual NHF contribution.
///
/// The NHF contribution is a percentage of the annual *basic* salary
/// component (2.5% under the Nigeria 2026 schedule), not of gross, and is
/// charged only when the employee elected to contribute. Non-contributing
/// employees owe zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::annual_nhf;
/// use payroll_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::nigeria_2026();
///
/// let contributing = annual_nhf(Decimal::from(3_000_000), true, config.rates());
/// assert_eq!(contributing, Decimal::from(75_000));
///
/// let opted_out = annual_nhf(Decimal::from(3_000_000), false, config.rates());
/// assert_eq!(opted_out, Decimal::ZERO);
/// ```
pub fn annual_nhf(annual_basic: Decimal, contributes_to_nhf: bool, rates: &StatutoryRates) -> Decimal {
    if contributes_to_nhf {
        annual_basic * rates.nhf_rate
    } else {
        Decimal::ZERO
    }
}
