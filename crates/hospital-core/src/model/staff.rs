use serde::{Deserialize, Serialize};

/// Backing table for staff members
pub const TABLE: &str = "staffs";

/// Staff - a member of the hospital workforce
///
/// Owns the records and prescriptions they authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    /// Auto-assigned identifier (`staff_id` column)
    pub id: i64,
    pub name: String,
    pub role: String,
    pub department: String,
    pub contact_info: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStaff {
    pub name: String,
    pub role: String,
    pub department: String,
    pub contact_info: String,
}

impl NewStaff {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        department: impl Into<String>,
        contact_info: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            department: department.into(),
            contact_info: contact_info.into(),
        }
    }
}
