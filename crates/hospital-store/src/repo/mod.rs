//! Repository layer for persisting hospital models to SQLite
//!
//! Every function takes a `&Connection`. A `Transaction` dereferences to a
//! `Connection`, so the same functions compose into a single unit of work.
//! Inserts use `RETURNING` so callers see the row exactly as stored,
//! including ids and column defaults.

mod billings;
mod patients;
mod pharmaceuticals;
mod records;
mod staffs;

use crate::errors::{from_rusqlite, Result};
use hospital_core::{model::TABLES, ExError, HospitalError};
use rusqlite::{Connection, Params, Row};

/// SQLite repository for the hospital tables
pub struct SqliteRepo;

impl SqliteRepo {
    /// Count the rows in one of the hospital tables
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a table outside the hospital schema.
    pub fn count_rows(conn: &Connection, table: &str) -> Result<i64> {
        if !TABLES.contains(&table) {
            return Err(ExError::from(HospitalError::UnknownTable {
                table: table.to_string(),
            })
            .with_op("count_rows"));
        }

        // Table name is checked against the fixed list above
        conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
            row.get(0)
        })
        .map_err(from_rusqlite)
    }
}

/// Run a query and map every row
fn collect_rows<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql).map_err(from_rusqlite)?;
    let rows = stmt
        .query_map(params, map)
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
    fn test_count_rows_rejects_unknown_table() {
        let conn = Connection::open_in_memory().unwrap();
        let err = SqliteRepo::count_rows(&conn, "sqlite_master").unwrap_err();
        assert_eq!(err.kind(), ExErrorKind::InvalidInput);
        assert_eq!(err.op(), Some("count_rows"));
    }
}
