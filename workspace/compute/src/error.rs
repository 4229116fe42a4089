use thiserror::Error;

/// Error types for the pricing engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComputeError {
    /// A caller-supplied parameter is outside its valid range
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The formula produced a value that cannot be represented, e.g. an overflow
    #[error("Calculation error: {0}")]
    Calculation(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;
