//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a statutory
//! schedule from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ScheduleMetadata, StatutoryConfig, StatutoryRates, TaxBand, TaxSchedule};

/// Statutory file structure (`statutory.yaml`).
#[derive(Debug, Clone, Deserialize)]
struct StatutoryFileConfig {
    metadata: ScheduleMetadata,
    rates: StatutoryRates,
}

/// Tax bands file structure (`tax_bands.yaml`).
#[derive(Debug, Clone, Deserialize)]
struct TaxBandsConfig {
    bands: Vec<TaxBand>,
}

/// Loads a statutory configuration from a directory of YAML files.
///
/// # Directory Structure
///
/// ```text
/// config/ng-paye-2026/
/// ├── statutory.yaml   # Schedule metadata and flat deduction rates
/// └── tax_bands.yaml   # Progressive tax band schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config/ng-paye-2026").unwrap();
/// println!("Loaded schedule: {}", config.metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/ng-paye-2026")
    ///
    /// # Returns
    ///
    /// Returns a validated [`StatutoryConfig`] on success, or an error if:
    /// - Either required file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML (`ConfigParseError`)
    /// - The band schedule is structurally invalid (`InvalidSchedule`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<StatutoryConfig> {
        let path = path.as_ref();

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryFileConfig>(&statutory_path)?;

        let bands_path = path.join("tax_bands.yaml");
        let bands_config = Self::load_yaml::<TaxBandsConfig>(&bands_path)?;

        let tax_schedule = TaxSchedule::new(bands_config.bands)?;

        Ok(StatutoryConfig::new(
            statutory.metadata,
            statutory.rates,
            tax_schedule,
        ))
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
