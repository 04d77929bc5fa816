//! Patient persistence

use std::time::Instant;

use hospital_core::{log_op_end, log_op_error, log_op_start};
use hospital_core::{ExError, HospitalError, NewPatient, Patient};
use rusqlite::{Connection, OptionalExtension, Row};

use super::{collect_rows, SqliteRepo};
use crate::errors::{from_rusqlite, Result};

const COLUMNS: &str = "patient_id, name, age, gender, contact_info";

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        name: row.get(1)?,
        age: row.get(2)?,
        gender: row.get(3)?,
        contact_info: row.get(4)?,
    })
}

impl SqliteRepo {
    /// Insert a patient and return it with its assigned id
    pub fn insert_patient(conn: &Connection, patient: &NewPatient) -> Result<Patient> {
        let stored = conn
            .query_row(
                &format!(
                    "INSERT INTO patients (name, age, gender, contact_info)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {COLUMNS}"
                ),
                rusqlite::params![
                    patient.name,
                    patient.age,
                    patient.gender,
                    patient.contact_info
                ],
                patient_from_row,
            )
            .map_err(|e| from_rusqlite(e).with_op("insert_patient").with_table("patients"))?;

        tracing::debug!(patient_id = stored.id, "patient inserted");
        Ok(stored)
    }

    /// Get a patient by id
    pub fn get_patient(conn: &Connection, patient_id: i64) -> Result<Option<Patient>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM patients WHERE patient_id = ?1"),
            [patient_id],
            patient_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    /// List all patients in id order
    pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM patients ORDER BY patient_id"),
            [],
            patient_from_row,
        )
    }

    /// Delete a patient together with their records, bills and prescriptions
    ///
    /// The dependents go through `ON DELETE CASCADE` in the same statement.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no patient has this id.
    pub fn delete_patient(conn: &Connection, patient_id: i64) -> Result<()> {
        let start = Instant::now();
        log_op_start!("delete_patient", patient_id = patient_id);

        let result = conn
            .execute("DELETE FROM patients WHERE patient_id = ?1", [patient_id])
            .map_err(from_rusqlite)
            .and_then(|deleted| {
                if deleted == 0 {
                    Err(ExError::from(HospitalError::PatientNotFound { patient_id })
                        .with_op("delete_patient"))
                } else {
                    Ok(())
                }
            });

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => {
                log_op_end!("delete_patient", duration_ms = duration_ms, patient_id = patient_id);
            }
            Err(err) => {
                log_op_error!("delete_patient", err, duration_ms = duration_ms);
            }
        }
        result
    }
}
