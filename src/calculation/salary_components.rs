//! Salary component amount calculation.
//!
//! This module splits annual gross salary into its basic, housing, and
//! transport components according to the employee's component shares.

use rust_decimal::Decimal;

use crate::models::ComponentShares;

/// The annual amounts of the three salary components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentAmounts {
    /// Annual basic salary.
    pub basic: Decimal,
    /// Annual housing allowance.
    pub housing: Decimal,
    /// Annual transport allowance.
    pub transport: Decimal,
}

/// Computes the annual component amounts from gross salary and shares.
///
/// Each amount is computed independently as `gross * share`. The shares are
/// expected to sum to 1 but this is not enforced here: whether a profile's
/// shares are consistent is a data-capture concern, and the engine computes
/// whatever the profile says.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::component_amounts;
/// use payroll_engine::models::ComponentShares;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let shares = ComponentShares {
///     basic: Decimal::from_str("0.5").unwrap(),
///     housing: Decimal::from_str("0.3").unwrap(),
///     transport: Decimal::from_str("0.2").unwrap(),
/// };
///
/// let amounts = component_amounts(Decimal::from(6_000_000), &shares);
/// assert_eq!(amounts.basic, Decimal::from(3_000_000));
/// assert_eq!(amounts.housing, Decimal::from(1_800_000));
/// assert_eq!(amounts.transport, Decimal::from(1_200_000));
/// ```
pub fn component_amounts(annual_gross: Decimal, shares: &ComponentShares) -> ComponentAmounts {
    ComponentAmounts {
        basic: annual_gross * shares.basic,
        housing: annual_gross * shares.housing,
        transport: annual_gross * shares.transport,
    }
}
