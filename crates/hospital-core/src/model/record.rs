use serde::{Deserialize, Serialize};

/// Backing table for medical records
pub const TABLE: &str = "records";

/// Record - a clinical note written by a staff member about a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Auto-assigned identifier (`record_id` column)
    pub id: i64,
    pub patient_id: i64,
    pub staff_id: i64,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRecord {
    pub patient_id: i64,
    pub staff_id: i64,
    pub details: String,
}

impl NewRecord {
    pub fn new(patient_id: i64, staff_id: i64, details: impl Into<String>) -> Self {
        Self {
            patient_id,
            staff_id,
            details: details.into(),
        }
    }
}
