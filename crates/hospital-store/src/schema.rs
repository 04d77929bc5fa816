//! Schema initialisation and verification
//!
//! `initialize_schema` is the single entry point: it checks any hospital
//! tables already present, applies the embedded migrations, then checks that
//! every hospital table has the declared columns and cascading foreign keys.
//! Stores created by other tools are adopted when compatible and rejected
//! with `SchemaMismatch`, untouched, otherwise.

use std::time::Instant;

use hospital_core::{log_op_end, log_op_error, log_op_start};
use rusqlite::Connection;

use crate::errors::{from_rusqlite, schema_mismatch, Result};
use crate::migrations::apply_migrations;

/// Expected foreign key on a table
#[derive(Debug, Clone, Copy)]
pub struct ForeignKeySpec {
    pub column: &'static str,
    pub references_table: &'static str,
    pub references_column: &'static str,
}

/// Expected shape of one table
#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub columns: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKeySpec],
}

const PATIENT_FK: ForeignKeySpec = ForeignKeySpec {
    column: "patient_id",
    references_table: "patients",
    references_column: "patient_id",
};

const STAFF_FK: ForeignKeySpec = ForeignKeySpec {
    column: "staff_id",
    references_table: "staffs",
    references_column: "staff_id",
};

/// The five hospital tables, in dependency order
pub const EXPECTED_TABLES: [TableSpec; 5] = [
    TableSpec {
        name: "patients",
        columns: &["patient_id", "name", "age", "gender", "contact_info"],
        foreign_keys: &[],
    },
    TableSpec {
        name: "staffs",
        columns: &["staff_id", "name", "role", "department", "contact_info"],
        foreign_keys: &[],
    },
    TableSpec {
        name: "records",
        columns: &["record_id", "patient_id", "staff_id", "details"],
        foreign_keys: &[PATIENT_FK, STAFF_FK],
    },
    TableSpec {
        name: "billings",
        columns: &["bill_id", "patient_id", "amount", "status", "services"],
        foreign_keys: &[PATIENT_FK],
    },
    TableSpec {
        name: "pharmaceuticals",
        columns: &[
            "prescription_id",
            "patient_id",
            "staff_id",
            "medications",
            "dosage_instructions",
        ],
        foreign_keys: &[PATIENT_FK, STAFF_FK],
    },
];

/// Ensure all hospital tables exist with their declared columns and constraints
///
/// Safe to call repeatedly; a second call changes nothing. A store with an
/// incompatible existing table is rejected before any DDL runs.
///
/// # Errors
///
/// - `StorageAccess` if the store cannot be read or written
/// - `SchemaMismatch` if an existing table or migration record is incompatible
pub fn initialize_schema(conn: &mut Connection) -> Result<()> {
    let start = Instant::now();
    log_op_start!("initialize_schema");

    let result = verify_existing_tables(conn)
        .and_then(|()| apply_migrations(conn))
        .and_then(|()| verify_schema(conn));

    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => {
            log_op_end!("initialize_schema", duration_ms = duration_ms);
        }
        Err(err) => {
            log_op_error!("initialize_schema", err, duration_ms = duration_ms);
        }
    }
    result
}

/// Compare the live schema with `EXPECTED_TABLES`
pub fn verify_schema(conn: &Connection) -> Result<()> {
    for spec in &EXPECTED_TABLES {
        verify_table(conn, spec)?;
    }
    Ok(())
}

/// Check only the hospital tables that are already present
fn verify_existing_tables(conn: &Connection) -> Result<()> {
    for spec in &EXPECTED_TABLES {
        if !table_columns(conn, spec.name)?.is_empty() {
            verify_table(conn, spec)?;
        }
    }
    Ok(())
}

fn verify_table(conn: &Connection, spec: &TableSpec) -> Result<()> {
    let mut columns = table_columns(conn, spec.name)?;
    if columns.is_empty() {
        return Err(schema_mismatch(spec.name, "table is missing"));
    }

    let mut expected: Vec<String> = spec.columns.iter().map(|c| c.to_string()).collect();
    columns.sort();
    expected.sort();
    if columns != expected {
        return Err(schema_mismatch(
            spec.name,
            format!("columns {:?} do not match expected {:?}", columns, expected),
        ));
    }

    let foreign_keys = foreign_keys(conn, spec.name)?;
    for fk in spec.foreign_keys {
        let found = foreign_keys.iter().find(|row| row.from == fk.column);
        let Some(row) = found else {
            return Err(schema_mismatch(
                spec.name,
                format!("column {} has no foreign key", fk.column),
            ));
        };
        if row.table != fk.references_table {
            return Err(schema_mismatch(
                spec.name,
                format!(
                    "foreign key {} references {} instead of {}",
                    fk.column, row.table, fk.references_table
                ),
            ));
        }
        // A NULL target means the referenced table's primary key
        if let Some(to) = &row.to {
            if to != fk.references_column {
                return Err(schema_mismatch(
                    spec.name,
                    format!(
                        "foreign key {} references column {} instead of {}",
                        fk.column, to, fk.references_column
                    ),
                ));
            }
        }
        if !row.on_delete.eq_ignore_ascii_case("CASCADE") {
            return Err(schema_mismatch(
                spec.name,
                format!("foreign key {} does not cascade on delete", fk.column),
            ));
        }
    }

    Ok(())
}

struct ForeignKeyRow {
    from: String,
    table: String,
    to: Option<String>,
    on_delete: String,
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
        .map_err(from_rusqlite)?;
    let columns = stmt
        .query_map([table], |row| row.get(0))
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<String>, _>>()
        .map_err(from_rusqlite)?;
    Ok(columns)
}

fn foreign_keys(conn: &Connection, table: &str) -> Result<Vec<ForeignKeyRow>> {
    let mut stmt = conn
        .prepare(r#"SELECT "from", "table", "to", on_delete FROM pragma_foreign_key_list(?1)"#)
        .map_err(from_rusqlite)?;
    let rows = stmt
        .query_map([table], |row| {
            Ok(ForeignKeyRow {
                from: row.get(0)?,
                table: row.get(1)?,
                to: row.get(2)?,
                on_delete: row.get(3)?,
            })
        })
        .map_err(from_rusqlite)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(from_rusqlite)?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hospital_core::ExErrorKind;

    #[test]
    fn test_expected_tables_match_model_names() {
        let names: Vec<&str> = EXPECTED_TABLES.iter().map(|t| t.name).collect();
        assert_eq!(names, hospital_core::model::TABLES);
    }

    #[test]
    fn test_verify_fails_on_empty_store() {
        let conn = Connection::open_in_memory().unwrap();
        let err = verify_schema(&conn).unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::SchemaMismatch);
        assert_eq!(err.table(), Some("patients"));
    }

    #[test]
    fn test_existing_check_ignores_absent_tables() {
        let conn = Connection::open_in_memory().unwrap();
        verify_existing_tables(&conn).unwrap();

        conn.execute_batch("CREATE TABLE records (record_id INTEGER PRIMARY KEY)")
            .unwrap();
        let err = verify_existing_tables(&conn).unwrap_err();
        assert_eq!(err.table(), Some("records"));
    }

    #[test]
    fn test_initialize_then_verify() {
        let mut conn = Connection::open_in_memory().unwrap();
        initialize_schema(&mut conn).unwrap();
        verify_schema(&conn).unwrap();
    }
}
