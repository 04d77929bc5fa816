//! Hospital Store - SQLite persistence for the hospital schema
//!
//! Provides:
//! - Connection management with foreign keys enforced
//! - Embedded, checksummed migrations and schema verification
//! - Repository functions for patients, staff, records, bills and prescriptions
//! - Atomic seeding of linked sample data
//! - Whole-store export

pub mod db;
pub mod errors;
pub mod export;
pub mod migrations;
pub mod repo;
pub mod schema;
pub mod seed;

// Re-export key types
pub use db::StoreOptions;
pub use errors::Result;
pub use repo::SqliteRepo;
pub use schema::initialize_schema;
pub use seed::{seed_example_data, SeededIds};
