//! Core data models for the Payroll Computation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod breakdown;
mod employee;

pub use breakdown::{BandTax, MonthlySummary, PayrollBreakdown};
pub use employee::{ComponentShares, Employee};
