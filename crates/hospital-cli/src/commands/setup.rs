//! Setup command
//!
//! Usage: hospital [--db <PATH>] [setup]

use std::path::Path;

pub const SUCCESS_MESSAGE: &str = "Database tables created and sample data inserted successfully!";

/// Initialise the schema, then seed one linked set of sample rows
pub fn execute(db_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = super::open_initialized(db_path)?;

    let ids = hospital_store::seed_example_data(&mut conn)?;
    tracing::debug!(
        patient_id = ids.patient_id,
        staff_id = ids.staff_id,
        "sample data seeded"
    );

    println!("{}", SUCCESS_MESSAGE);
    Ok(())
}
