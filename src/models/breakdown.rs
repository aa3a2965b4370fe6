//! Payroll breakdown models.
//!
//! This module contains the [`PayrollBreakdown`] type and its associated
//! structures that capture all outputs of a payroll computation: the annual
//! statutory layer, the per-band PAYE trace, and the monthly pay figures.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The tax charged within a single band of the progressive schedule.
///
/// One entry is emitted per schedule band, in band order. Bands above the
/// taxable income carry zero amounts, so the trace always has the same
/// length as the schedule.
///
/// # Example
///
/// ```
/// use payroll_engine::models::BandTax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let band = BandTax {
///     limit: Some(Decimal::from_str("2200000").unwrap()),
///     rate: Decimal::from_str("0.15").unwrap(),
///     taxable_amount: Decimal::from_str("1400000").unwrap(),
///     tax_amount: Decimal::from_str("210000").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandTax {
    /// The cumulative upper limit of the band; `None` for the unbounded top band.
    pub limit: Option<Decimal>,
    /// The flat rate applied within the band.
    pub rate: Decimal,
    /// The portion of taxable income that fell within this band.
    pub taxable_amount: Decimal,
    /// The tax charged on that portion.
    pub tax_amount: Decimal,
}

/// The complete payroll breakdown for one employee for one monthly pay period.
///
/// All fields are derived; a breakdown has no identity or persistence of its
/// own and is recomputed whenever a profile changes. Monthly figures are
/// their annual counterparts divided by twelve, except the loan deduction,
/// which is already a monthly amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Annual gross salary.
    pub annual_gross: Decimal,
    /// Annual basic salary component.
    pub annual_basic: Decimal,
    /// Annual housing allowance component.
    pub annual_housing: Decimal,
    /// Annual transport allowance component.
    pub annual_transport: Decimal,
    /// Annual pension contribution (8% of gross).
    pub annual_pension: Decimal,
    /// Annual NHF contribution (2.5% of basic, zero unless elected).
    pub annual_nhf: Decimal,
    /// Pension plus NHF.
    pub total_pre_tax_deductions: Decimal,
    /// Rent relief: 20% of annual rent, capped.
    pub annual_rent_relief: Decimal,
    /// Taxable income after pre-tax deductions and rent relief, floored at zero.
    pub annual_taxable_income: Decimal,
    /// Per-band PAYE trace, one entry per schedule band.
    pub tax_bands: Vec<BandTax>,
    /// Total annual PAYE across all bands.
    pub total_annual_paye: Decimal,

    /// Monthly gross salary.
    pub monthly_gross: Decimal,
    /// Monthly basic salary component.
    pub monthly_basic: Decimal,
    /// Monthly housing allowance component.
    pub monthly_housing: Decimal,
    /// Monthly transport allowance component.
    pub monthly_transport: Decimal,
    /// Monthly pension contribution.
    pub monthly_pension: Decimal,
    /// Monthly NHF contribution.
    pub monthly_nhf: Decimal,
    /// Monthly PAYE.
    pub monthly_paye: Decimal,
    /// Monthly loan repayment, taken as-is.
    pub monthly_loan: Decimal,
    /// Pension + NHF + PAYE + loan for the month.
    pub total_monthly_deductions: Decimal,
    /// Monthly gross less total monthly deductions. May be negative.
    pub net_take_home_pay: Decimal,
}

/// The three-field projection used by roster-level reporting views.
///
/// # Example
///
/// ```
/// use payroll_engine::models::MonthlySummary;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let summary = MonthlySummary {
///     employee_id: "EMP001".to_string(),
///     monthly_gross: Decimal::from_str("500000").unwrap(),
///     total_deductions: Decimal::from_str("153062.50").unwrap(),
///     net_pay: Decimal::from_str("346937.50").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The employee the summary belongs to.
    pub employee_id: String,
    /// Monthly gross salary.
    pub monthly_gross: Decimal,
    /// Total monthly deductions.
    pub total_deductions: Decimal,
    /// Net monthly pay.
    pub net_pay: Decimal,
}
