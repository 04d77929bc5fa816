//! Whole-store export
//!
//! Reads every hospital table into one serialisable value.

use hospital_core::{Billing, ExError, HospitalError, Patient, Pharmaceutical, Record, Staff};
use rusqlite::Connection;
use serde::Serialize;

use crate::errors::Result;
use crate::repo::SqliteRepo;

/// Contents of the five hospital tables, each in id order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HospitalExport {
    pub patients: Vec<Patient>,
    pub staffs: Vec<Staff>,
    pub records: Vec<Record>,
    pub billings: Vec<Billing>,
    pub pharmaceuticals: Vec<Pharmaceutical>,
}

impl HospitalExport {
    /// Pretty-printed JSON, one key per table
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ExError::from(HospitalError::from(e)).with_op("export"))
    }
}

/// Read every hospital table
pub fn export_all(conn: &Connection) -> Result<HospitalExport> {
    Ok(HospitalExport {
        patients: SqliteRepo::list_patients(conn)?,
        staffs: SqliteRepo::list_staffs(conn)?,
        records: SqliteRepo::list_records(conn)?,
        billings: SqliteRepo::list_billings(conn)?,
        pharmaceuticals: SqliteRepo::list_pharmaceuticals(conn)?,
    })
}
