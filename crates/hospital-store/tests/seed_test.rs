// Integration tests for seeding
// Covers the sample-data scenario and all-or-nothing commits

use hospital_core::ExErrorKind;
use hospital_store::db::open_in_memory;
use hospital_store::seed::{apply_seed, SeedPlan};
use hospital_store::{initialize_schema, seed_example_data, SqliteRepo};
use rusqlite::Connection;

const TABLES: [&str; 5] = ["patients", "staffs", "records", "billings", "pharmaceuticals"];

fn setup_test_db() -> Connection {
    let mut conn = open_in_memory().unwrap();
    initialize_schema(&mut conn).unwrap();
    conn
}

fn row_counts(conn: &Connection) -> Vec<i64> {
    TABLES
        .iter()
        .map(|t| SqliteRepo::count_rows(conn, t).unwrap())
        .collect()
}

#[test]
fn test_seed_inserts_sample_rows() {
    let mut conn = setup_test_db();

    let ids = seed_example_data(&mut conn).unwrap();

    assert_eq!(row_counts(&conn), vec![1, 1, 1, 1, 1]);

    let patients = SqliteRepo::list_patients(&conn).unwrap();
    assert_eq!(patients[0].name, "John Doe");
    assert_eq!(patients[0].age, 30);
    assert_eq!(patients[0].id, ids.patient_id);

    let staffs = SqliteRepo::list_staffs(&conn).unwrap();
    assert_eq!(staffs[0].name, "Dr. Smith");
    assert_eq!(staffs[0].id, ids.staff_id);

    let records = SqliteRepo::list_records(&conn).unwrap();
    assert_eq!(records[0].details, "Patient complains of chest pain.");
    assert_eq!(records[0].patient_id, patients[0].id);
    assert_eq!(records[0].staff_id, staffs[0].id);

    let billings = SqliteRepo::list_billings(&conn).unwrap();
    assert_eq!(billings[0].amount.to_string(), "200.00");
    assert_eq!(billings[0].status.as_deref(), Some("Unpaid"));
    assert_eq!(billings[0].services, "Consultation Fee, ECG Test");
    assert_eq!(billings[0].patient_id, patients[0].id);

    let prescriptions = SqliteRepo::list_pharmaceuticals(&conn).unwrap();
    assert_eq!(prescriptions[0].medications, "Aspirin");
    assert_eq!(
        prescriptions[0].dosage_instructions,
        "Take one tablet daily after meals."
    );
    assert_eq!(prescriptions[0].staff_id, staffs[0].id);
}

#[test]
fn test_seed_twice_adds_second_linked_set() {
    let mut conn = setup_test_db();

    let first = seed_example_data(&mut conn).unwrap();
    let second = seed_example_data(&mut conn).unwrap();

    assert_eq!(row_counts(&conn), vec![2, 2, 2, 2, 2]);
    assert_ne!(first.patient_id, second.patient_id);

    let record = SqliteRepo::get_record(&conn, second.record_id)
        .unwrap()
        .unwrap();
    assert_eq!(record.patient_id, second.patient_id);
    assert_eq!(record.staff_id, second.staff_id);
}

#[test]
fn test_failed_seed_leaves_no_rows() {
    let mut conn = setup_test_db();

    // Reject the last insert of the plan
    conn.execute_batch(
        "CREATE TRIGGER reject_prescriptions BEFORE INSERT ON pharmaceuticals
         BEGIN
             SELECT RAISE(ABORT, 'prescriptions disabled');
         END;",
    )
    .unwrap();

    let err = seed_example_data(&mut conn).unwrap_err();
    assert_eq!(err.kind(), ExErrorKind::ConstraintViolation);
    assert_eq!(err.table(), Some("pharmaceuticals"));

    assert_eq!(row_counts(&conn), vec![0, 0, 0, 0, 0]);
}

#[test]
fn test_seed_can_be_rerun_after_failure() {
    let mut conn = setup_test_db();

    conn.execute_batch(
        "CREATE TRIGGER reject_bills BEFORE INSERT ON billings
         BEGIN
             SELECT RAISE(ABORT, 'billing closed');
         END;",
    )
    .unwrap();
    assert!(seed_example_data(&mut conn).is_err());

    conn.execute_batch("DROP TRIGGER reject_bills;").unwrap();
    seed_example_data(&mut conn).unwrap();

    assert_eq!(row_counts(&conn), vec![1, 1, 1, 1, 1]);
}

#[test]
fn test_apply_custom_plan_with_explicit_status() {
    let mut conn = setup_test_db();

    let mut plan = SeedPlan::example();
    plan.patient.name = "Jane Roe".to_string();
    plan.billing.amount = "1234.5".parse().unwrap();
    plan.billing.status = Some("Paid".to_string());

    let ids = apply_seed(&mut conn, &plan).unwrap();

    let bill = SqliteRepo::get_billing(&conn, ids.bill_id).unwrap().unwrap();
    assert_eq!(bill.amount.to_string(), "1234.50");
    assert_eq!(bill.status.as_deref(), Some("Paid"));

    let patient = SqliteRepo::get_patient(&conn, ids.patient_id)
        .unwrap()
        .unwrap();
    assert_eq!(patient.name, "Jane Roe");
}
