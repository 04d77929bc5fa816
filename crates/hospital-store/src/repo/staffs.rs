//! Staff persistence

use std::time::Instant;

use hospital_core::{log_op_end, log_op_error, log_op_start};
use hospital_core::{ExError, HospitalError, NewStaff, Staff};
use rusqlite::{Connection, OptionalExtension, Row};

use super::{collect_rows, SqliteRepo};
use crate::errors::{from_rusqlite, Result};

const COLUMNS: &str = "staff_id, name, role, department, contact_info";

fn staff_from_row(row: &Row<'_>) -> rusqlite::Result<Staff> {
    Ok(Staff {
        id: row.get(0)?,
        name: row.get(1)?,
        role: row.get(2)?,
        department: row.get(3)?,
        contact_info: row.get(4)?,
    })
}

impl SqliteRepo {
    /// Insert a staff member and return it with its assigned id
    pub fn insert_staff(conn: &Connection, staff: &NewStaff) -> Result<Staff> {
        let stored = conn
            .query_row(
                &format!(
                    "INSERT INTO staffs (name, role, department, contact_info)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {COLUMNS}"
                ),
                rusqlite::params![staff.name, staff.role, staff.department, staff.contact_info],
                staff_from_row,
            )
            .map_err(|e| from_rusqlite(e).with_op("insert_staff").with_table("staffs"))?;

        tracing::debug!(staff_id = stored.id, "staff inserted");
        Ok(stored)
    }

    pub fn get_staff(conn: &Connection, staff_id: i64) -> Result<Option<Staff>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM staffs WHERE staff_id = ?1"),
            [staff_id],
            staff_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_staffs(conn: &Connection) -> Result<Vec<Staff>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM staffs ORDER BY staff_id"),
            [],
            staff_from_row,
        )
    }

    /// Delete a staff member together with the records and prescriptions they wrote
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no staff member has this id.
    pub fn delete_staff(conn: &Connection, staff_id: i64) -> Result<()> {
        let start = Instant::now();
        log_op_start!("delete_staff", staff_id = staff_id);

        let result = conn
            .execute("DELETE FROM staffs WHERE staff_id = ?1", [staff_id])
            .map_err(from_rusqlite)
            .and_then(|deleted| {
                if deleted == 0 {
                    Err(ExError::from(HospitalError::StaffNotFound { staff_id })
                        .with_op("delete_staff"))
                } else {
                    Ok(())
                }
            });

        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(()) => {
                log_op_end!("delete_staff", duration_ms = duration_ms, staff_id = staff_id);
            }
            Err(err) => {
                log_op_error!("delete_staff", err, duration_ms = duration_ms);
            }
        }
        result
    }
}
