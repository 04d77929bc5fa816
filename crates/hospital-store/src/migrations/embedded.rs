//! Embedded SQL migrations
//!
//! Migrations are embedded at compile time using include_str!

use sha2::{Digest, Sha256};

/// Migration metadata
#[derive(Debug, Clone, Copy)]
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

impl Migration {
    /// Hex SHA-256 of the SQL text, recorded when the migration is applied
    pub fn checksum(&self) -> String {
        hex::encode(Sha256::digest(self.sql.as_bytes()))
    }
}

/// Get all embedded migrations in order
pub fn get_migrations() -> Vec<Migration> {
    vec![Migration {
        id: "001_initial_schema",
        sql: include_str!("../../migrations/001_initial_schema.sql"),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_declare_all_tables() {
        let migrations = get_migrations();
        let sql = migrations[0].sql;
        for table in hospital_core::model::TABLES {
            assert!(
                sql.contains(&format!("CREATE TABLE IF NOT EXISTS {} (", table)),
                "missing table {}",
                table
            );
        }
    }

    #[test]
    fn test_checksum_tracks_sql_text() {
        let migration = get_migrations()[0];
        assert_eq!(migration.checksum().len(), 64);
        assert_eq!(migration.checksum(), migration.checksum());

        let edited = Migration {
            sql: "SELECT 1",
            ..migration
        };
        assert_ne!(edited.checksum(), migration.checksum());
    }

    #[test]
    fn test_staff_references_use_staffs_table() {
        let sql = get_migrations()[0].sql;
        assert!(!sql.contains("REFERENCES staff("));
        assert_eq!(sql.matches("REFERENCES staffs(staff_id)").count(), 2);
    }
}
