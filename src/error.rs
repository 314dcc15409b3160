use thiserror::Error;

pub type Result<T> = std::result::Result<T, CameliaError>;

#[derive(Debug, Error)]
pub enum CameliaError {
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    #[error("Status not found: {0}")]
    StatusNotFound(String),

    #[error("Branch not found: {0}")]
    BranchNotFound(String),

    #[error("Shift not found: {0}")]
    ShiftNotFound(String),

    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Field '{field}' expects a {expected} value")]
    FieldMismatch {
        field: &'static str,
        expected: &'static str,
    },

    #[error("Field '{0}' is derived and cannot be set directly")]
    ReadOnlyField(&'static str),

    #[error("'{name}' is still referenced by {count} record(s)")]
    NameInUse { name: String, count: usize },

    #[error("Invalid record ID format: {0}")]
    InvalidRecordId(String),

    #[error("Row {0} is already being edited")]
    EditInProgress(String),

    #[error("No active edit")]
    NoActiveEdit,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
