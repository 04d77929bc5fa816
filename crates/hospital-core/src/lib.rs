//! Hospital Core - domain models, error facility and logging facility
//!
//! This crate provides the foundational pieces shared by the store and the CLI:
//! - Patient, Staff, Record, Billing and Pharmaceutical models
//! - Fixed-point `Amount` for billing
//! - Structured error facility (`ExError`, `ExErrorKind`) and domain errors
//! - Canonical logging facility with test capture

pub mod errors;
pub mod logging_facility;
pub mod model;

pub use hospital_core_types as core_types;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, HospitalError, Result};
pub use model::{
    Amount, Billing, NewBilling, NewPatient, NewPharmaceutical, NewRecord, NewStaff, Patient,
    Pharmaceutical, Record, Staff,
};
