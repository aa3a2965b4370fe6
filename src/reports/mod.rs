//! Reporting projections over engine output.
//!
//! This module derives the roster-level reports that compliance and payment
//! workflows consume: the monthly payroll register and the PAYE, pension,
//! and NHF remittance schedules. Every report is a pure fold over the
//! canonical breakdown; nothing here re-implements a formula.

mod register;
mod remittance;

pub use register::{PayrollRegister, RegisterRow, RegisterTotals, build_register};
pub use remittance::{
    NhfRemittanceRow, NhfRemittanceSchedule, PayeRemittanceRow, PayeRemittanceSchedule,
    PensionRemittanceRow, PensionRemittanceSchedule, nhf_schedule, paye_schedule, pension_schedule,
};
