//! Medical record persistence

use hospital_core::{NewRecord, Record};
use rusqlite::{Connection, OptionalExtension, Row};

use super::{collect_rows, SqliteRepo};
use crate::errors::{from_rusqlite, Result};

const COLUMNS: &str = "record_id, patient_id, staff_id, details";

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<Record> {
    Ok(Record {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        staff_id: row.get(2)?,
        details: row.get(3)?,
    })
}

impl SqliteRepo {
    /// Insert a record for an existing patient and staff member
    ///
    /// # Errors
    ///
    /// Returns `ConstraintViolation` if either referenced id does not exist.
    pub fn insert_record(conn: &Connection, record: &NewRecord) -> Result<Record> {
        let stored = conn
            .query_row(
                &format!(
                    "INSERT INTO records (patient_id, staff_id, details)
                     VALUES (?1, ?2, ?3)
                     RETURNING {COLUMNS}"
                ),
                rusqlite::params![record.patient_id, record.staff_id, record.details],
                record_from_row,
            )
            .map_err(|e| from_rusqlite(e).with_op("insert_record").with_table("records"))?;

        tracing::debug!(
            record_id = stored.id,
            patient_id = stored.patient_id,
            staff_id = stored.staff_id,
            "record inserted"
        );
        Ok(stored)
    }

    pub fn get_record(conn: &Connection, record_id: i64) -> Result<Option<Record>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM records WHERE record_id = ?1"),
            [record_id],
            record_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_records(conn: &Connection) -> Result<Vec<Record>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM records ORDER BY record_id"),
            [],
            record_from_row,
        )
    }

    /// All records about one patient
    pub fn records_for_patient(conn: &Connection, patient_id: i64) -> Result<Vec<Record>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM records WHERE patient_id = ?1 ORDER BY record_id"),
            [patient_id],
            record_from_row,
        )
    }

    /// All records written by one staff member
    pub fn records_for_staff(conn: &Connection, staff_id: i64) -> Result<Vec<Record>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM records WHERE staff_id = ?1 ORDER BY record_id"),
            [staff_id],
            record_from_row,
        )
    }
}
