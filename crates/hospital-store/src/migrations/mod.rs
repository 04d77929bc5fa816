//! Migration framework
//!
//! Provides:
//! - Migration runner with recorded checksums
//! - Idempotent application
//! - Embedded SQL migrations

mod embedded;
mod runner;

pub use embedded::{get_migrations, Migration};
pub use runner::apply_migrations;
