use thiserror::Error;

use crate::matrix::matrix::Shape;

/// Error returned by the fallible [`Matrix`](crate::matrix::matrix::Matrix) operations
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// Operands have the wrong shape for the operation
    #[error("invalid operands for {operation}: {lhs} and {rhs}")]
    DimensionMismatch {
        operation: &'static str,
        lhs: Shape,
        rhs: Shape,
    },
    #[error("cannot compute {operation} of non-square {shape} matrix")]
    NotSquare {
        operation: &'static str,
        shape: Shape,
    },
    #[error("{operation} not implemented for matrices larger than 2x2 (got {shape})")]
    Unsupported {
        operation: &'static str,
        shape: Shape,
    },
    #[error("singular matrix has no inverse")]
    Singular,
    #[error("index ({row}, {col}) out of range for {shape} matrix")]
    OutOfRange { row: usize, col: usize, shape: Shape },
    #[error("grid must be non-empty and rectangular")]
    InvalidGrid,
}

/// Broad category of a [`MatrixError`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Value,
    Unsupported,
    Domain,
    Index,
}

impl MatrixError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MatrixError::DimensionMismatch { .. }
            | MatrixError::NotSquare { .. }
            | MatrixError::InvalidGrid => ErrorKind::Value,
            MatrixError::Unsupported { .. } => ErrorKind::Unsupported,
            MatrixError::Singular => ErrorKind::Domain,
            MatrixError::OutOfRange { .. } => ErrorKind::Index,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let shape = Shape { rows: 2, cols: 3 };
        assert_eq!(
            MatrixError::NotSquare {
                operation: "trace",
                shape
            }
            .kind(),
            ErrorKind::Value
        );
        assert_eq!(MatrixError::InvalidGrid.kind(), ErrorKind::Value);
        assert_eq!(MatrixError::Singular.kind(), ErrorKind::Domain);
        assert_eq!(
            MatrixError::OutOfRange {
                row: 4,
                col: 0,
                shape
            }
            .kind(),
            ErrorKind::Index
        );
    }

    #[test]
    fn test_error_message() {
        let err = MatrixError::DimensionMismatch {
            operation: "addition",
            lhs: Shape { rows: 2, cols: 3 },
            rhs: Shape { rows: 3, cols: 2 },
        };
        assert_eq!(err.to_string(), "invalid operands for addition: 2x3 and 3x2");

        let err = MatrixError::Unsupported {
            operation: "determinant",
            shape: Shape { rows: 3, cols: 3 },
        };
        assert_eq!(
            err.to_string(),
            "determinant not implemented for matrices larger than 2x2 (got 3x3)"
        );
    }
}
