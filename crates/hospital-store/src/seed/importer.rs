//! Seed application
//!
//! Inserts a `SeedPlan` as one transaction: either all five rows become
//! visible or none do.

use std::time::Instant;

use hospital_core::{log_op_end, log_op_error, log_op_start};
use hospital_core::{NewBilling, NewPharmaceutical, NewRecord};
use rusqlite::{Connection, Transaction};
use serde::Serialize;

use crate::errors::{from_rusqlite, Result};
use crate::repo::SqliteRepo;
use crate::seed::plan::SeedPlan;

/// Ids assigned to the rows of one seed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeededIds {
    pub patient_id: i64,
    pub staff_id: i64,
    pub record_id: i64,
    pub bill_id: i64,
    pub prescription_id: i64,
}

/// Insert the sample hospital data
///
/// # Errors
///
/// - `ConstraintViolation` if any row is rejected by the store
/// - `StorageAccess` / `Persistence` if the commit cannot complete
///
/// On error nothing from this call remains in the store.
pub fn seed_example_data(conn: &mut Connection) -> Result<SeededIds> {
    apply_seed(conn, &SeedPlan::example())
}

/// Insert a seed plan as a single unit of work
///
/// The patient and staff rows are inserted first; the record, bill and
/// prescription are linked to the ids they receive.
pub fn apply_seed(conn: &mut Connection, plan: &SeedPlan) -> Result<SeededIds> {
    let start = Instant::now();
    log_op_start!("apply_seed");

    let result = conn
        .transaction()
        .map_err(from_rusqlite)
        .and_then(|tx| {
            let ids = insert_plan(&tx, plan)?;
            tx.commit().map_err(from_rusqlite)?;
            Ok(ids)
        });

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(ids) => {
            log_op_end!(
                "apply_seed",
                duration_ms = duration_ms,
                patient_id = ids.patient_id,
                staff_id = ids.staff_id
            );
        }
        Err(err) => {
            log_op_error!("apply_seed", err, duration_ms = duration_ms);
        }
    }
    result
}

// Dropping `tx` without commit rolls back every insert made here
fn insert_plan(tx: &Transaction<'_>, plan: &SeedPlan) -> Result<SeededIds> {
    let patient = SqliteRepo::insert_patient(tx, &plan.patient)?;
    let staff = SqliteRepo::insert_staff(tx, &plan.staff)?;

    let record = SqliteRepo::insert_record(
        tx,
        &NewRecord::new(patient.id, staff.id, plan.record.details.clone()),
    )?;

    let mut billing = NewBilling::new(patient.id, plan.billing.amount, plan.billing.services.clone());
    billing.status = plan.billing.status.clone();
    let billing = SqliteRepo::insert_billing(tx, &billing)?;

    let prescription = SqliteRepo::insert_pharmaceutical(
        tx,
        &NewPharmaceutical::new(
            patient.id,
            staff.id,
            plan.prescription.medications.clone(),
            plan.prescription.dosage_instructions.clone(),
        ),
    )?;

    Ok(SeededIds {
        patient_id: patient.id,
        staff_id: staff.id,
        record_id: record.id,
        bill_id: billing.id,
        prescription_id: prescription.id,
    })
}
