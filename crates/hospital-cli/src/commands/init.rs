//! Init command
//!
//! Usage: hospital [--db <PATH>] init

use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "Database tables created successfully!";

pub fn execute(db_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    super::open_initialized(db_path)?;
    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
