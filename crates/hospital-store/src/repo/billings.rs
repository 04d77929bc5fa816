//! Billing persistence

use hospital_core::{Amount, Billing, NewBilling};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row};

use super::{collect_rows, SqliteRepo};
use crate::errors::{from_rusqlite, Result};

const COLUMNS: &str = "bill_id, patient_id, amount, status, services";

fn billing_from_row(row: &Row<'_>) -> rusqlite::Result<Billing> {
    // NUMERIC affinity hands back INTEGER for whole amounts and REAL otherwise
    let raw: f64 = row.get(2)?;
    let amount = Amount::from_f64(raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(2, Type::Real, Box::new(e)))?;

    Ok(Billing {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        amount,
        status: row.get(3)?,
        services: row.get(4)?,
    })
}

impl SqliteRepo {
    /// Insert a bill for an existing patient
    ///
    /// When `status` is `None` the column is left out of the insert so the
    /// store default (`Unpaid`) applies.
    pub fn insert_billing(conn: &Connection, billing: &NewBilling) -> Result<Billing> {
        let result = match &billing.status {
            Some(status) => conn.query_row(
                &format!(
                    "INSERT INTO billings (patient_id, amount, status, services)
                     VALUES (?1, ?2, ?3, ?4)
                     RETURNING {COLUMNS}"
                ),
                rusqlite::params![
                    billing.patient_id,
                    billing.amount.to_f64(),
                    status,
                    billing.services
                ],
                billing_from_row,
            ),
            None => conn.query_row(
                &format!(
                    "INSERT INTO billings (patient_id, amount, services)
                     VALUES (?1, ?2, ?3)
                     RETURNING {COLUMNS}"
                ),
                rusqlite::params![billing.patient_id, billing.amount.to_f64(), billing.services],
                billing_from_row,
            ),
        };
        let stored =
            result.map_err(|e| from_rusqlite(e).with_op("insert_billing").with_table("billings"))?;

        tracing::debug!(bill_id = stored.id, amount = %stored.amount, "bill inserted");
        Ok(stored)
    }

    pub fn get_billing(conn: &Connection, bill_id: i64) -> Result<Option<Billing>> {
        conn.query_row(
            &format!("SELECT {COLUMNS} FROM billings WHERE bill_id = ?1"),
            [bill_id],
            billing_from_row,
        )
        .optional()
        .map_err(from_rusqlite)
    }

    pub fn list_billings(conn: &Connection) -> Result<Vec<Billing>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM billings ORDER BY bill_id"),
            [],
            billing_from_row,
        )
    }

    /// All bills raised against one patient
    pub fn billings_for_patient(conn: &Connection, patient_id: i64) -> Result<Vec<Billing>> {
        collect_rows(
            conn,
            &format!("SELECT {COLUMNS} FROM billings WHERE patient_id = ?1 ORDER BY bill_id"),
            [patient_id],
            billing_from_row,
        )
    }
}
