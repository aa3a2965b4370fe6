//! Rent relief calculation.
//!
//! This module computes the annual rent relief: a percentage of annual rent
//! paid, subject to a statutory ceiling.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;

/// The result of a rent relief calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentReliefResult {
    /// The relief granted, after applying the cap.
    pub relief: Decimal,
    /// Whether the statutory cap bound the relief.
    pub cap_applied: bool,
}

/// Computes the annual rent relief.
///
/// The relief is `annual_rent * rent_relief_rate`, capped at
/// `rent_relief_cap` (20% of rent capped at 500,000 under the Nigeria 2026
/// schedule). Relief exactly at the cap is not considered capped.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::annual_rent_relief;
/// use payroll_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
///
/// let config = StatutoryConfig::nigeria_2026();
///
/// // 20% of 1.2M = 240,000, below the 500,000 cap.
/// let result = annual_rent_relief(Decimal::from(1_200_000), config.rates());
/// assert_eq!(result.relief, Decimal::from(240_000));
/// assert!(!result.cap_applied);
///
/// // 20% of 3M = 600,000, capped at 500,000.
/// let capped = annual_rent_relief(Decimal::from(3_000_000), config.rates());
/// assert_eq!(capped.relief, Decimal::from(500_000));
/// assert!(capped.cap_applied);
/// ```
pub fn annual_rent_relief(annual_rent: Decimal, rates: &StatutoryRates) -> RentReliefResult {
    let uncapped = annual_rent * rates.rent_relief_rate;

    if uncapped > rates.rent_relief_cap {
        RentReliefResult {
            relief: rates.rent_relief_cap,
            cap_applied: true,
        }
    } else {
        RentReliefResult {
            relief: uncapped,
            cap_applied: false,
        }
    }
}
