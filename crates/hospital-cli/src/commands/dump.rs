//! Dump command
//!
//! Usage: hospital [--db <PATH>] dump
//!
//! Prints all five tables as one pretty JSON document on stdout.

use std::path::Path;

pub fn execute(db_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let conn = super::open_initialized(db_path)?;

    let export = hospital_store::export::export_all(&conn)?;
    println!("{}", export.to_json()?);
    Ok(())
}
