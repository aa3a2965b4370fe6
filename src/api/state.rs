//! Application state for the Payroll Computation Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::StatutoryConfig;

/// Shared application state.
///
/// Holds the statutory configuration, constructed once at startup and read
/// by every handler. The configuration is never mutated, so concurrent
/// requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The statutory configuration.
    config: Arc<StatutoryConfig>,
}

impl AppState {
    /// Creates a new application state with the given statutory configuration.
    pub fn new(config: StatutoryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }
}
