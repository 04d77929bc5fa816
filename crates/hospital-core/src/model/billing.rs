use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Backing table for bills
pub const TABLE: &str = "billings";

/// Status the store assigns when a bill is inserted without one
pub const DEFAULT_BILLING_STATUS: &str = "Unpaid";

/// Billing - a charge raised against a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Billing {
    /// Auto-assigned identifier (`bill_id` column)
    pub id: i64,
    pub patient_id: i64,
    pub amount: Amount,
    /// Nullable column; `Some("Unpaid")` unless set explicitly
    pub status: Option<String>,
    pub services: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBilling {
    pub patient_id: i64,
    pub amount: Amount,
    /// `None` leaves the column to the store default
    pub status: Option<String>,
    pub services: String,
}

impl NewBilling {
    pub fn new(patient_id: i64, amount: Amount, services: impl Into<String>) -> Self {
        Self {
            patient_id,
            amount,
            status: None,
            services: services.into(),
        }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
