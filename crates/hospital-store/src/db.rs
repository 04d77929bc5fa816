//! Database connection management
//!
//! Provides utilities for opening and configuring SQLite connections.
//! A `Connection` closes when dropped, so callers own the store for exactly
//! the scope that holds it.

use crate::errors::{from_rusqlite, Result};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default store location, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "hospital.db";

/// How long a statement waits on a locked database before failing
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Where and how to open the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreOptions {
    pub path: PathBuf,
    pub busy_timeout: Duration,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
        }
    }
}

impl StoreOptions {
    pub fn at<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            ..Self::default()
        }
    }
}

/// Open a SQLite database at the given path, creating the file if absent
pub fn open<P: AsRef<Path>>(path: P) -> Result<Connection> {
    open_with(&StoreOptions::at(path))
}

/// Open and configure a SQLite database from `StoreOptions`
pub fn open_with(options: &StoreOptions) -> Result<Connection> {
    tracing::debug!(path = %options.path.display(), "opening store");
    let conn = Connection::open(&options.path).map_err(|e| {
        from_rusqlite(e).with_message(format!(
            "cannot open store at {}",
            options.path.display()
        ))
    })?;
    configure(&conn, options.busy_timeout)?;
    Ok(conn)
}

/// Open an in-memory SQLite database (for testing)
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory().map_err(from_rusqlite)?;
    configure(&conn, DEFAULT_BUSY_TIMEOUT)?;
    Ok(conn)
}

/// Configure a connection with the settings the schema relies on
pub fn configure(conn: &Connection, busy_timeout: Duration) -> Result<()> {
    // Cascades and reference checks are only enforced with this on
    conn.pragma_update(None, "foreign_keys", "ON")
        .map_err(from_rusqlite)?;

    conn.busy_timeout(busy_timeout).map_err(from_rusqlite)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_foreign_keys_enabled() {
        let conn = open_in_memory().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }

    #[test]
    fn test_default_options() {
        let options = StoreOptions::default();
        assert_eq!(options.path, PathBuf::from("hospital.db"));
        assert_eq!(options.busy_timeout, Duration::from_secs(5));
        assert_eq!(StoreOptions::at("x.db").busy_timeout, DEFAULT_BUSY_TIMEOUT);
    }
}
