use thiserror::Error;

/// Result type alias using HospitalError
pub type Result<T> = std::result::Result<T, HospitalError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, testing, and diagnostics printed at the process boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Structural/Validation
    InvalidInput,
    NotFound,
    /// NOT NULL, FOREIGN KEY, PRIMARY KEY or trigger abort raised by the store
    ConstraintViolation,
    /// A pre-existing store does not match the declared tables
    SchemaMismatch,

    // Integration/IO
    /// The store location is unreachable, unwritable or not a database
    StorageAccess,
    Persistence,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::SchemaMismatch => "ERR_SCHEMA_MISMATCH",
            ExErrorKind::StorageAccess => "ERR_STORAGE_ACCESS",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification kind for programmatic handling plus optional
/// context (operation, table, entity id) for diagnostics.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    table: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            table: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add table context
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(table) = &self.table {
            write!(f, " (table: {})", table)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(source) = &self.source {
            write!(f, "; caused by {}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain errors raised before anything reaches the store
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HospitalError {
    /// Billing amount is not a valid DECIMAL(10,2) value
    #[error("Invalid amount '{input}': {reason}")]
    InvalidAmount { input: String, reason: String },

    #[error("Patient not found: {patient_id}")]
    PatientNotFound { patient_id: i64 },

    #[error("Staff not found: {staff_id}")]
    StaffNotFound { staff_id: i64 },

    /// Table name outside the five hospital tables
    #[error("Unknown table: {table}")]
    UnknownTable { table: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<HospitalError> for ExError {
    fn from(err: HospitalError) -> Self {
        match err {
            HospitalError::InvalidAmount { input, reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("parse_amount")
                    .with_table("billings")
                    .with_message(format!("Invalid amount '{}': {}", input, reason))
            }

            HospitalError::PatientNotFound { patient_id } => ExError::new(ExErrorKind::NotFound)
                .with_table("patients")
                .with_entity_id(patient_id)
                .with_message("Patient not found"),

            HospitalError::StaffNotFound { staff_id } => ExError::new(ExErrorKind::NotFound)
                .with_table("staffs")
                .with_entity_id(staff_id)
                .with_message("Staff not found"),

            HospitalError::UnknownTable { table } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Unknown table: {}", table)),

            HospitalError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for HospitalError {
    fn from(err: serde_json::Error) -> Self {
        HospitalError::Serialization {
            message: err.to_string(),
        }
    }
}
