use thiserror::Error;

/// Error type for this crate.
///
/// Every fallible operation on a [SquareMatrix](crate::SquareMatrix)
/// reports one of three kinds of failure, detected before any
/// result is produced.
///
/// # Example
///
/// Adding matrices of different order is an argument error.
///
/// ```
/// use squaremat::{MatrixError, SquareMatrix};
///
/// let a = SquareMatrix::zeros(2);
/// let b = SquareMatrix::zeros(3);
/// assert!(matches!(a.checked_add(&b), Err(MatrixError::InvalidArgument(_))));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum MatrixError {
    /// Bad shape, mismatched order, or a zero divisor/modulus.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Operation undefined for the matrix's current state,
    /// such as the power or determinant of an empty matrix.
    #[error("logic error: {0}")]
    LogicError(String),
    /// Row index past the end of the matrix.
    #[error("out of range: {0}")]
    OutOfRange(String),
}

impl From<ndarray::ShapeError> for MatrixError {
    fn from(err: ndarray::ShapeError) -> Self {
        MatrixError::InvalidArgument(err.to_string())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatrixError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_kind() {
        let err = MatrixError::InvalidArgument("order mismatch".to_string());
        assert_eq!(err.to_string(), "invalid argument: order mismatch");

        let err = MatrixError::LogicError("det of empty matrix".to_string());
        assert_eq!(err.to_string(), "logic error: det of empty matrix");

        let err = MatrixError::OutOfRange("row 5 >= order 2".to_string());
        assert_eq!(err.to_string(), "out of range: row 5 >= order 2");
    }
}
