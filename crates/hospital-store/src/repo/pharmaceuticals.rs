//! Prescription persistence

use hospital_core::{NewPharmaceutical, Pharmaceutical};
use rusqlite::{Connection, OptionalExtension, Row};

use super::{collect_rows, SqliteRepo};
use crate::errors::{from_rusqlite, Result};

const COLUMNS: &str = "prescription_id, patient_id, staff_id, medications, dosage_instructions";

fn pharmaceutical_from_row(row: &Row<'_>) -> rusqlite::Result<Pharmaceutical> {
    Ok(Pharmaceutical {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        staff_id: row.get(2)?,
        medications: row.get(3)?,
        dosage_instructions: row.get(4)?,
    })
}

impl SqliteRepo {
    /// Insert a prescription for an existing patient, issued by an existing staff member
    pub fn insert_pharmaceutical(
        conn: &Connection,
        prescription: &NewPharmaceutical,
    ) -> Result<Pharmaceutical> {
        let stored = conn
            .query_row(
                &format!(
                    "INSERT INTO pharmaceuticals (patient_id, staff_id, medications, dosage_instructions)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {COLUMNS}"
                ),
                rusqlite::params![
                    prescription.patient_id,
                    prescription.staff_id,
                    prescription.medications,
                    prescription.dosage_instructions
                ],
                pharmaceutical_from_row,
            )
            .map_err(|e| {
                from_rusqlite(e)
                    .with_op("insert_pharmaceutical")
                    .with_table("pharmaceuticals")
            })?;

        tracing::debug!(prescription_id = stored.id, "prescription inserted");
        Ok(stored)
    }

    pub fn get_pharmaceutical(
        conn: &Connection,
        prescription_id: i64,
    ) -> Result<Option<Pharmaceutical>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM pharmaceuticals WHERE prescription_id = ?1"),
            [prescription_id],
            pharmaceutical_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_pharmaceuticals(conn: &Connection) -> Result<Vec<Pharmaceutical>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM pharmaceuticals ORDER BY prescription_id"),
            [],
            pharmaceutical_from_row,
        )
    }

    pub fn pharmaceuticals_for_patient(
        conn: &Connection,
        patient_id: i64,
    ) -> Result<Vec<Pharmaceutical>> {
        collect_rows(
            conn,
            &format!(
                "SELECT {COLUMNS} FROM pharmaceuticals WHERE patient_id = ?1 ORDER BY prescription_id"
            ),
            [patient_id],
            pharmaceutical_from_row,
        )
    }

    pub fn pharmaceuticals_for_staff(
        conn: &Connection,
        staff_id: i64,
    ) -> Result<Vec<Pharmaceutical>> {
        collect_rows(
            conn,
            &format!(
                "SELECT {COLUMNS} FROM pharmaceuticals WHERE staff_id = ?1 ORDER BY prescription_id"
            ),
            [staff_id],
            pharmaceutical_from_row,
        )
    }
}
