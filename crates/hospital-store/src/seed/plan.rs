//! Seed plan: the rows to insert, before ids exist
//!
//! Dependent rows carry only their payload; the patient and staff ids are
//! filled in from the rows inserted earlier in the same transaction.

use hospital_core::{Amount, NewPatient, NewStaff};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedRecord {
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedBilling {
    pub amount: Amount,
    /// `None` takes the store default
    pub status: Option<String>,
    pub services: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPrescription {
    pub medications: String,
    pub dosage_instructions: String,
}

/// One linked row per hospital table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedPlan {
    pub patient: NewPatient,
    pub staff: NewStaff,
    pub record: SeedRecord,
    pub billing: SeedBilling,
    pub prescription: SeedPrescription,
}

impl SeedPlan {
    /// The sample hospital data
    pub fn example() -> Self {
        Self {
            patient: NewPatient::new("John Doe", 30, "Male", "123-456-7890"),
            staff: NewStaff::new(
                "Dr. Smith",
                "Doctor",
                "Cardiology",
                "dr.smith@hospital.com",
            ),
            record: SeedRecord {
                details: "Patient complains of chest pain.".to_string(),
            },
            billing: SeedBilling {
                amount: Amount::from_units(200),
                status: None,
                services: "Consultation Fee, ECG Test".to_string(),
            },
            prescription: SeedPrescription {
                medications: "Aspirin".to_string(),
                dosage_instructions: "Take one tablet daily after meals.".to_string(),
            },
        }
    }
}
