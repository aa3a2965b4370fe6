//! Statutory configuration types.
//!
//! This module contains the strongly-typed configuration structures for the
//! jurisdiction parameter set: flat deduction rates, the rent relief cap,
//! and the progressive PAYE band schedule. The configuration is constructed
//! once and only read afterwards; no part of it is mutated by the engine.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the statutory schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleMetadata {
    /// ISO country code of the jurisdiction (e.g., "NG").
    pub jurisdiction: String,
    /// The human-readable name of the schedule.
    pub name: String,
    /// The version or effective date of the schedule.
    pub version: String,
    /// URL to the official documentation.
    pub source_url: String,
}

/// Flat statutory deduction and relief rates.
///
/// All rates are fractions of 1 (a value of `0.08` means 8%).
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryRates {
    /// Pension contribution rate, applied to annual gross.
    pub pension_rate: Decimal,
    /// NHF contribution rate, applied to the annual basic component.
    pub nhf_rate: Decimal,
    /// Rent relief rate, applied to annual rent.
    pub rent_relief_rate: Decimal,
    /// Ceiling on the annual rent relief.
    pub rent_relief_cap: Decimal,
}

/// A single band of the progressive tax schedule.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaxBand {
    /// The cumulative upper limit of the band; `None` for the unbounded top band.
    #[serde(default)]
    pub limit: Option<Decimal>,
    /// The flat rate applied to income falling within the band.
    pub rate: Decimal,
}

/// An ordered, validated progressive tax band schedule.
///
/// Bands are ordered by ascending cumulative limit; the final band is
/// unbounded. The schedule is validated at construction so the calculation
/// walk never has to handle a malformed table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    bands: Vec<TaxBand>,
}

impl TaxSchedule {
    /// Creates a schedule after validating its structure.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if:
    /// - the band list is empty
    /// - any band other than the last is unbounded
    /// - the last band has a finite limit
    /// - finite limits are not strictly ascending and positive
    pub fn new(bands: Vec<TaxBand>) -> EngineResult<Self> {
        if bands.is_empty() {
            return Err(EngineError::InvalidSchedule {
                message: "schedule must contain at least one band".to_string(),
            });
        }

        let mut previous_limit = Decimal::ZERO;
        for (index, band) in bands.iter().enumerate() {
            let is_last = index == bands.len() - 1;
            match band.limit {
                Some(limit) if is_last => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("last band must be unbounded, found limit {}", limit),
                    });
                }
                Some(limit) => {
                    if limit <= previous_limit {
                        return Err(EngineError::InvalidSchedule {
                            message: format!(
                                "band limits must be strictly ascending, {} follows {}",
                                limit, previous_limit
                            ),
                        });
                    }
                    previous_limit = limit;
                }
                None if is_last => {}
                None => {
                    return Err(EngineError::InvalidSchedule {
                        message: format!("band {} is unbounded but is not the last band", index + 1),
                    });
                }
            }
        }

        Ok(Self { bands })
    }

    /// Returns the bands in ascending limit order.
    pub fn bands(&self) -> &[TaxBand] {
        &self.bands
    }
}

/// The complete statutory configuration for one jurisdiction.
///
/// Aggregates the schedule metadata, the flat deduction rates, and the tax
/// band schedule. Constructed once at startup and shared read-only across
/// all computations.
#[derive(Debug, Clone)]
pub struct StatutoryConfig {
    metadata: ScheduleMetadata,
    rates: StatutoryRates,
    tax_schedule: TaxSchedule,
}

impl StatutoryConfig {
    /// Creates a new StatutoryConfig from its component parts.
    pub fn new(metadata: ScheduleMetadata, rates: StatutoryRates, tax_schedule: TaxSchedule) -> Self {
        Self {
            metadata,
            rates,
            tax_schedule,
        }
    }

    /// The built-in Nigeria 2026 statutory schedule.
    ///
    /// Pension 8% of gross, NHF 2.5% of basic, rent relief 20% of annual
    /// rent capped at 500,000, and the five-band 2026 PAYE schedule
    /// (0% to 800k, 15% to 2.2M, 25% to 5M, 35% to 12M, 45% above).
    pub fn nigeria_2026() -> Self {
        let metadata = ScheduleMetadata {
            jurisdiction: "NG".to_string(),
            name: "Nigeria PAYE Statutory Schedule".to_string(),
            version: "2026-01-01".to_string(),
            source_url: "https://www.firs.gov.ng/".to_string(),
        };

        let rates = StatutoryRates {
            pension_rate: Decimal::new(8, 2),
            nhf_rate: Decimal::new(25, 3),
            rent_relief_rate: Decimal::new(20, 2),
            rent_relief_cap: Decimal::from(500_000),
        };

        let bands = vec![
            TaxBand {
                limit: Some(Decimal::from(800_000)),
                rate: Decimal::ZERO,
            },
            TaxBand {
                limit: Some(Decimal::from(2_200_000)),
                rate: Decimal::new(15, 2),
            },
            TaxBand {
                limit: Some(Decimal::from(5_000_000)),
                rate: Decimal::new(25, 2),
            },
            TaxBand {
                limit: Some(Decimal::from(12_000_000)),
                rate: Decimal::new(35, 2),
            },
            TaxBand {
                limit: None,
                rate: Decimal::new(45, 2),
            },
        ];

        // Bands above are well-formed by construction.
        Self {
            metadata,
            rates,
            tax_schedule: TaxSchedule { bands },
        }
    }

    /// Returns the schedule metadata.
    pub fn metadata(&self) -> &ScheduleMetadata {
        &self.metadata
    }

    /// Returns the flat statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.rates
    }

    /// Returns the progressive tax band schedule.
    pub fn tax_schedule(&self) -> &TaxSchedule {
        &self.tax_schedule
    }
}
