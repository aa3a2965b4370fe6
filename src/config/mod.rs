//! Statutory configuration for the Payroll Computation Engine.
//!
//! This module provides the statutory parameter set (deduction rates, rent
//! relief cap, progressive tax bands) as an immutable configuration value,
//! either built in code via [`StatutoryConfig::nigeria_2026`] or loaded from
//! YAML files via [`ConfigLoader`].
//!
//! # Example
//!
//! ```
//! use payroll_engine::config::StatutoryConfig;
//!
//! let config = StatutoryConfig::nigeria_2026();
//! assert_eq!(config.metadata().jurisdiction, "NG");
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{ScheduleMetadata, StatutoryConfig, StatutoryRates, TaxBand, TaxSchedule};
