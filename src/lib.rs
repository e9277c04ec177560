//! # squaremat: dense square matrices with value semantics
//!
//! `squaremat` provides a single value type, [`SquareMatrix`], an n×n grid
//! of `f64` stored row-major in one owned buffer. It is meant for small to
//! medium dense matrices where exact, well-defined operator behavior matters
//! more than a full linear-algebra toolkit.
//!
//! ## Overview
//!
//! - Element-wise arithmetic, matrix product, scalar scaling and division
//! - Hadamard product and Euclidean integer modulo
//! - Transpose, negation, increment and decrement
//! - Integer power by repeated squaring
//! - Determinant by Gaussian elimination with partial pivoting
//!
//! Comparison operators order matrices **by the sum of their elements**
//! only; see [`SquareMatrix`] for details.
//!
//! ## Usage
//!
//! ```
//! use squaremat::SquareMatrix;
//!
//! let a = SquareMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b = SquareMatrix::from_rows([[4.0, 3.0], [2.0, 1.0]]).unwrap();
//!
//! let sum = &a + &b;
//! assert_eq!(sum.as_slice(), &[5.0, 5.0, 5.0, 5.0]);
//!
//! let det = a.determinant().unwrap();
//! assert!((det + 2.0).abs() < squaremat::EPS);
//!
//! print!("{}", a ^ 2);
//! ```
//!
//! Every operator that can fail also has a checked form returning
//! [`Result`]:
//!
//! ```
//! use squaremat::{MatrixError, SquareMatrix};
//!
//! let a = SquareMatrix::zeros(2);
//! assert!(matches!(a.checked_div_scalar(0.0), Err(MatrixError::InvalidArgument(_))));
//! assert!(matches!(SquareMatrix::default().determinant(), Err(MatrixError::LogicError(_))));
//! ```

pub mod constants;
pub mod error;
pub mod matrix;

// Re-export primary components
pub use constants::EPS;
pub use error::{MatrixError, Result};
pub use matrix::{ensure_same_order, SquareMatrix};

/// Version information for the squaremat library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
