use serde::{Deserialize, Serialize};

/// Backing table for patients
pub const TABLE: &str = "patients";

/// Patient - a person receiving care
///
/// Owns records, bills and prescriptions. Deleting a patient removes all of
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Auto-assigned identifier (`patient_id` column)
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub contact_info: String,
}

/// Insert-side view of a patient, before the store assigns an id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub contact_info: String,
}

impl NewPatient {
    pub fn new(
        name: impl Into<String>,
        age: i32,
        gender: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
            contact_info: contact_info.into(),
        }
    }
}
