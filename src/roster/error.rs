use thiserror::Error;

/// Rejections raised while validating a single record.
///
/// Recoverable: the record is skipped and the session keeps reading.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("Age must be greater than {min}: got {got}")]
    AgeTooSmall { min: i32, got: i32 },

    #[error("Score must be positive: got {got}")]
    ScoreNotPositive { got: f64 },

    #[error("{field} must be numeric: got '{got}'")]
    NotNumeric { field: &'static str, got: String },
}

/// Session-fatal ingest failures. Everything since session start rolls back.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),
}
