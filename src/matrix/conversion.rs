//! Conversion functions between `SquareMatrix` and other dense formats

use ndarray::Array2;

use crate::error::{MatrixError, Result};
use crate::matrix::SquareMatrix;

impl SquareMatrix {
    /// Copies this matrix into an `ndarray` 2-D array of shape (n, n)
    pub fn to_ndarray(&self) -> Array2<f64> {
        let n = self.order();
        // the buffer always holds n² elements, so the shape cannot mismatch
        Array2::from_shape_fn((n, n), |(i, j)| self.as_slice()[i * n + j])
    }

    /// Builds a matrix from an `ndarray` 2-D array.
    ///
    /// A 0×0 array yields the empty matrix.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if the array is not square.
    pub fn from_ndarray(array: &Array2<f64>) -> Result<Self> {
        let (rows, cols) = array.dim();
        if rows != cols {
            return Err(MatrixError::InvalidArgument(format!(
                "not square: {}x{} array",
                rows, cols
            )));
        }
        // iter() walks in logical row-major order for any memory layout
        let data = array.iter().copied().collect();
        Ok(SquareMatrix::from_raw(rows, data))
    }

    /// Copies the rows out into nested vectors
    pub fn to_vec_rows(&self) -> Vec<Vec<f64>> {
        self.rows().map(|row| row.to_vec()).collect()
    }

    /// Wraps a flat row-major buffer.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] unless `data.len() == order²`.
    pub fn from_row_major(order: usize, data: Vec<f64>) -> Result<Self> {
        // validate through ndarray so the message matches the other shape errors
        let array = Array2::from_shape_vec((order, order), data)?;
        Ok(SquareMatrix::from_raw(order, array.into_raw_vec()))
    }
}

impl From<&SquareMatrix> for Array2<f64> {
    fn from(m: &SquareMatrix) -> Self {
        m.to_ndarray()
    }
}

impl TryFrom<Array2<f64>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(array: Array2<f64>) -> Result<Self> {
        SquareMatrix::from_ndarray(&array)
    }
}

impl TryFrom<Vec<Vec<f64>>> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        SquareMatrix::from_rows(rows)
    }
}

impl TryFrom<&[Vec<f64>]> for SquareMatrix {
    type Error = MatrixError;

    fn try_from(rows: &[Vec<f64>]) -> Result<Self> {
        SquareMatrix::from_rows(rows)
    }
}

impl<const N: usize> TryFrom<[[f64; N]; N]> for SquareMatrix {
    type Error = MatrixError;

    /// Only fails for `N == 0`
    fn try_from(rows: [[f64; N]; N]) -> Result<Self> {
        SquareMatrix::from_rows(rows)
    }
}
