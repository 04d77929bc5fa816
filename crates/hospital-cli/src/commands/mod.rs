pub mod dump;
pub mod init;
pub mod setup;

use hospital_store::db;
use rusqlite::Connection;
use std::path::Path;

/// Open the store and bring its schema up to date
fn open_initialized(path: &Path) -> hospital_store::Result<Connection> {
    let mut conn = db::open(path)?;
    hospital_store::initialize_schema(&mut conn)?;
    Ok(conn)
}
