use std::fmt;

/// Error returned when building a matrix from an untyped slice.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MatrixError {
    /// The slice did not hold exactly `expected` elements.
    InvalidDimension { expected: usize, actual: usize },
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidDimension { expected, actual } => write!(
                f,
                "invalid matrix dimension: expected {expected} elements, got {actual}"
            ),
        }
    }
}

impl std::error::Error for MatrixError {}
