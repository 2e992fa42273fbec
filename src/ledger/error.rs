use thiserror::Error;

/// Malformed transfer input. Raised before any storage access.
#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("Amount must be numeric: got '{0}'")]
    AmountNotNumeric(String),

    #[error("Amount must be positive")]
    AmountNotPositive,

    #[error("{field} account number must be numeric: got '{got}'")]
    AccountNotNumeric { field: &'static str, got: String },
}

/// Transfer failures past the input boundary. All of them roll the session back.
#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Database error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Invalid account number provided")]
    InvalidAccount,
}
