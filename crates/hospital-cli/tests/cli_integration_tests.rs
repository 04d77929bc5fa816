//! CLI integration tests
//!
//! Run the built `hospital` binary against stores in a temporary directory.

use rusqlite::Connection;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const SETUP_MESSAGE: &str = "Database tables created and sample data inserted successfully!";
const TABLES: [&str; 5] = ["patients", "staffs", "records", "billings", "pharmaceuticals"];

fn run_cli(dir: &Path, args: &[&str]) -> Output {
    let cli_bin = env!("CARGO_BIN_EXE_hospital");
    Command::new(cli_bin)
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute CLI")
}

fn row_count(db_path: &Path, table: &str) -> i64 {
    let conn = Connection::open(db_path).unwrap();
    conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn test_no_arguments_creates_and_seeds_default_store() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(temp_dir.path(), &[]);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), SETUP_MESSAGE);

    let db_path = temp_dir.path().join("hospital.db");
    assert!(db_path.exists());
    for table in TABLES {
        assert_eq!(row_count(&db_path, table), 1, "table {}", table);
    }
}

#[test]
fn test_second_run_adds_another_set() {
    let temp_dir = TempDir::new().unwrap();

    assert!(run_cli(temp_dir.path(), &[]).status.success());
    assert!(run_cli(temp_dir.path(), &["setup"]).status.success());

    let db_path = temp_dir.path().join("hospital.db");
    for table in TABLES {
        assert_eq!(row_count(&db_path, table), 2, "table {}", table);
    }
}

#[test]
fn test_init_creates_empty_tables() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("custom.db");

    let output = run_cli(
        temp_dir.path(),
        &["--db", db_path.to_str().unwrap(), "init"],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Database tables created successfully!"
    );
    for table in TABLES {
        assert_eq!(row_count(&db_path, table), 0, "table {}", table);
    }
    assert!(!temp_dir.path().join("hospital.db").exists());
}

#[test]
fn test_dump_prints_seeded_rows_as_json() {
    let temp_dir = TempDir::new().unwrap();
    assert!(run_cli(temp_dir.path(), &[]).status.success());

    let output = run_cli(temp_dir.path(), &["dump"]);
    assert!(output.status.success());

    let dump: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(dump["patients"][0]["name"], "John Doe");
    assert_eq!(dump["staffs"][0]["name"], "Dr. Smith");
    assert_eq!(dump["billings"][0]["amount"], "200.00");
    assert_eq!(dump["billings"][0]["status"], "Unpaid");
    assert_eq!(dump["pharmaceuticals"][0]["medications"], "Aspirin");
}

#[test]
fn test_unreachable_store_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("missing").join("hospital.db");

    let output = run_cli(temp_dir.path(), &["--db", db_path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains("ERR_STORAGE_ACCESS"), "stderr: {}", stderr);
}

#[test]
fn test_incompatible_store_exits_with_schema_error() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("hospital.db");
    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute_batch("CREATE TABLE staffs (id INTEGER PRIMARY KEY, title TEXT);")
            .unwrap();
    }

    let output = run_cli(temp_dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_SCHEMA_MISMATCH"), "stderr: {}", stderr);

    let conn = Connection::open(&db_path).unwrap();
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1, "rejected store must be left as found");
}
