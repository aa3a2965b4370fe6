//! Progressive PAYE tax calculation.
//!
//! This module walks the cumulative-limit band schedule over annual taxable
//! income, charging each band's rate on the portion of income that falls
//! within the band's width.

use rust_decimal::Decimal;

use crate::config::TaxSchedule;
use crate::models::BandTax;

/// The result of a PAYE calculation: the per-band trace and the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayeResult {
    /// One entry per schedule band, in band order. Bands above the taxable
    /// income carry zero amounts.
    pub bands: Vec<BandTax>,
    /// Total annual PAYE across all bands.
    pub total: Decimal,
}

/// Computes annual PAYE over a progressive band schedule.
///
/// Bands are applied in ascending order. Each band taxes only the portion of
/// taxable income falling within its width (`limit - previous_limit`; the
/// unbounded top band takes everything that remains). Once taxable income is
/// exhausted, remaining bands contribute zero. Taxable income at or below
/// zero produces zero tax in every band.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_paye;
/// use payroll_engine::config::StatutoryConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = StatutoryConfig::nigeria_2026();
///
/// // Income entirely inside the 0% band.
/// let result = calculate_paye(Decimal::from(800_000), config.tax_schedule());
/// assert_eq!(result.total, Decimal::ZERO);
///
/// // 5,205,000 taxable: 0 + 210,000 + 700,000 + 71,750.
/// let result = calculate_paye(Decimal::from(5_205_000), config.tax_schedule());
/// assert_eq!(result.total, Decimal::from_str("981750").unwrap());
/// ```
pub fn calculate_paye(taxable_income: Decimal, schedule: &TaxSchedule) -> PayeResult {
    let mut remaining = taxable_income;
    let mut previous_limit = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    let mut bands = Vec::with_capacity(schedule.bands().len());

    for band in schedule.bands() {
        let taxable_in_band = if remaining > Decimal::ZERO {
            match band.limit {
                Some(limit) => remaining.min(limit - previous_limit),
                None => remaining,
            }
        } else {
            Decimal::ZERO
        };

        let tax_amount = taxable_in_band * band.rate;
        total += tax_amount;
        remaining -= taxable_in_band;
        if let Some(limit) = band.limit {
            previous_limit = limit;
        }

        bands.push(BandTax {
            limit: band.limit,
            rate: band.rate,
            taxable_amount: taxable_in_band,
            tax_amount,
        });
    }

    PayeResult { bands, total }
}
