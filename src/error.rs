use thiserror::Error;

// Unified error type for colvec

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatError {
    #[error("dimension mismatch: expected {expected}, found {found}")]
    Shape { expected: usize, found: usize },
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("could not allocate storage for {0} elements")]
    Allocation(usize),
}

pub type Result<T> = std::result::Result<T, MatError>;
