//! Error handling for hospital-store
//!
//! Wraps hospital-core ExError with store-specific helpers

use hospital_core::errors::{ExError, ExErrorKind};
use rusqlite::ErrorCode;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a migration error, keeping the classification of the cause
pub fn migration_error(migration_id: &str, err: rusqlite::Error) -> ExError {
    let cause = from_rusqlite(err);
    ExError::new(cause.kind())
        .with_op("migration")
        .with_message(format!("Migration {} failed", migration_id))
        .with_source(cause)
}

/// Create a checksum mismatch error
pub fn checksum_mismatch(migration_id: &str, expected: &str, actual: &str) -> ExError {
    ExError::new(ExErrorKind::SchemaMismatch)
        .with_op("migration_checksum")
        .with_message(format!(
            "Checksum mismatch for migration {}: recorded {}, embedded {}",
            migration_id, expected, actual
        ))
}

/// Create a schema mismatch error for one table
pub fn schema_mismatch(table: &str, reason: impl Into<String>) -> ExError {
    ExError::new(ExErrorKind::SchemaMismatch)
        .with_op("verify_schema")
        .with_table(table)
        .with_message(reason)
}

/// Classify a rusqlite::Error into the store's error kinds
///
/// Constraint failures (NOT NULL, FOREIGN KEY, PRIMARY KEY, trigger aborts)
/// become `ConstraintViolation`; failures to reach or write the file become
/// `StorageAccess`.
pub fn from_rusqlite(err: rusqlite::Error) -> ExError {
    let kind = match &err {
        rusqlite::Error::SqliteFailure(failure, _) => match failure.code {
            ErrorCode::ConstraintViolation => ExErrorKind::ConstraintViolation,
            ErrorCode::CannotOpen
            | ErrorCode::ReadOnly
            | ErrorCode::PermissionDenied
            | ErrorCode::NotADatabase
            | ErrorCode::DiskFull
            | ErrorCode::SystemIoFailure
            | ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked => ExErrorKind::StorageAccess,
            _ => ExErrorKind::Persistence,
        },
        rusqlite::Error::QueryReturnedNoRows => ExErrorKind::NotFound,
        _ => ExErrorKind::Persistence,
    };

    ExError::new(kind)
        .with_op("sqlite")
        .with_message(err.to_string())
}
