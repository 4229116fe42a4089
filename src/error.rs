use compute::ComputeError;
use thiserror::Error;

/// Error types for scenario persistence
#[derive(Error, Debug)]
pub enum StoreError {
    /// A required field is missing or malformed, e.g. an empty name
    #[error("Validation error: {0}")]
    Validation(String),

    /// No scenario carries the requested identifier
    #[error("Scenario {0} not found")]
    NotFound(i32),

    /// The pricing engine rejected the inputs or could not compute the rates
    #[error(transparent)]
    Compute(#[from] ComputeError),

    /// Error from the database operations
    #[error("Storage error: {0}")]
    Storage(#[from] sea_orm::DbErr),
}

/// Type alias for Result with StoreError
pub type Result<T> = std::result::Result<T, StoreError>;
