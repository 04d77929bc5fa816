//! Seed data
//!
//! Provides:
//! - `SeedPlan`: one patient, one staff member and their linked rows
//! - The fixed example plan inserted on first setup
//! - Atomic application of a plan in a single transaction

pub mod importer;
pub mod plan;

pub use importer::{apply_seed, seed_example_data, SeededIds};
pub use plan::{SeedBilling, SeedPlan, SeedPrescription, SeedRecord};
