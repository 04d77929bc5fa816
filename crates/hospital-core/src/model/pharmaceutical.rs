use serde::{Deserialize, Serialize};

/// Backing table for prescriptions
pub const TABLE: &str = "pharmaceuticals";

/// Pharmaceutical - a prescription issued by a staff member to a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pharmaceutical {
    /// Auto-assigned identifier (`prescription_id` column)
    pub id: i64,
    pub patient_id: i64,
    pub staff_id: i64,
    pub medications: String,
    pub dosage_instructions: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPharmaceutical {
    pub patient_id: i64,
    pub staff_id: i64,
    pub medications: String,
    pub dosage_instructions: String,
}

impl NewPharmaceutical {
    pub fn new(
        patient_id: i64,
        staff_id: i64,
        medications: impl Into<String>,
        dosage_instructions: impl Into<String>,
    ) -> Self {
        Self {
            patient_id,
            staff_id,
            medications: medications.into(),
            dosage_instructions: dosage_instructions.into(),
        }
    }
}
