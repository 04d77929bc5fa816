pub mod amount;
pub mod billing;
pub mod patient;
pub mod pharmaceutical;
pub mod record;
pub mod staff;

pub use amount::Amount;
pub use billing::{Billing, NewBilling, DEFAULT_BILLING_STATUS};
pub use patient::{NewPatient, Patient};
pub use pharmaceutical::{NewPharmaceutical, Pharmaceutical};
pub use record::{NewRecord, Record};
pub use staff::{NewStaff, Staff};

/// Names of the five hospital tables, in dependency order
pub const TABLES: [&str; 5] = [
    patient::TABLE,
    staff::TABLE,
    record::TABLE,
    billing::TABLE,
    pharmaceutical::TABLE,
];
