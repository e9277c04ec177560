//! Dense square matrix storage, element access, comparison and formatting

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::ops::{Index, IndexMut};

use crate::constants::{self, MAX_DEBUG_ELEMENTS_PER_ROW, MAX_DEBUG_ROWS};
use crate::error::{MatrixError, Result};

/// A dense n×n matrix of `f64` values with value semantics.
///
/// Elements are stored row-major in a single exclusively owned buffer:
/// element (i, j) lives at offset `i * order + j`, and the buffer length is
/// always exactly `order²`. An order-0 matrix is the empty matrix and owns an
/// empty buffer. Cloning performs a deep copy, so two instances never share
/// mutable state.
///
/// # Comparison is by sum
///
/// `==`, `<`, `<=`, `>` and `>=` compare matrices **only by the sum of
/// their elements**, within [`EPS`](crate::EPS). Two matrices of different
/// order, or with completely different entries, compare equal when their
/// sums agree. This is not a linear-algebra equivalence relation. Use
/// [`approx_eq_elements`](SquareMatrix::approx_eq_elements) for an
/// element-wise check.
///
/// ```
/// use squaremat::SquareMatrix;
///
/// let a = SquareMatrix::from_rows([[1.0, 1.0], [1.0, 1.0]]).unwrap();
/// let c = SquareMatrix::from_rows([[2.0, 1.0, 1.0], [0.0; 3], [0.0; 3]]).unwrap();
/// assert!(a == c);
/// ```
#[derive(Clone, Default)]
pub struct SquareMatrix {
    /// Side length n
    order: usize,

    /// Row-major elements (size: order * order)
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Comparison tolerance, see [`crate::EPS`]
    pub const EPS: f64 = constants::EPS;

    /// Creates a matrix of the given order with every element set to `fill`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidArgument`] if `order == 0` and `fill`
    /// is non-zero: an empty matrix cannot hold a value.
    pub fn new(order: usize, fill: f64) -> Result<Self> {
        if order == 0 && fill != 0.0 {
            return Err(MatrixError::InvalidArgument(
                "order 0 with value".to_string(),
            ));
        }

        Ok(Self {
            order,
            data: vec![fill; order * order],
        })
    }

    /// Creates a zero-filled matrix of the given order
    pub fn zeros(order: usize) -> Self {
        Self {
            order,
            data: vec![0.0; order * order],
        }
    }

    /// Creates an identity matrix of the given order
    pub fn identity(order: usize) -> Self {
        let mut m = Self::zeros(order);
        for i in 0..order {
            m.data[i * order + i] = 1.0;
        }
        m
    }

    /// Builds a matrix from a sequence of rows.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidArgument`] if there are no rows, or if
    /// any row's length differs from the number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m[1][0], 3.0);
    ///
    /// assert!(SquareMatrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).is_err());
    /// ```
    pub fn from_rows<I, R>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[f64]>,
    {
        let rows: Vec<R> = rows.into_iter().collect();
        let order = rows.len();
        if order == 0 {
            return Err(MatrixError::InvalidArgument("empty init".to_string()));
        }

        let mut data = Vec::with_capacity(order * order);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != order {
                return Err(MatrixError::InvalidArgument(format!(
                    "not square: row {} has {} values, expected {}",
                    r,
                    row.len(),
                    order
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self { order, data })
    }

    /// Wraps an already row-major buffer whose length is `order²`.
    pub(crate) fn from_raw(order: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), order * order, "buffer must hold order² elements");
        Self { order, data }
    }

    /// Returns the side length n
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns true for the order-0 matrix
    pub fn is_empty(&self) -> bool {
        self.order == 0
    }

    /// Sum of all `order²` elements
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Row-major view of all elements
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Mutable row-major view of all elements
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Read-only view of row `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if `i >= order`.
    pub fn row(&self, i: usize) -> Result<&[f64]> {
        let range = self.row_range(i)?;
        Ok(&self.data[range])
    }

    /// Mutable view of row `i`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::OutOfRange`] if `i >= order`.
    pub fn row_mut(&mut self, i: usize) -> Result<&mut [f64]> {
        let range = self.row_range(i)?;
        Ok(&mut self.data[range])
    }

    fn row_range(&self, i: usize) -> Result<std::ops::Range<usize>> {
        if i >= self.order {
            return Err(MatrixError::OutOfRange(format!(
                "row {} >= order {}",
                i, self.order
            )));
        }
        let start = i * self.order;
        Ok(start..start + self.order)
    }

    /// Returns element (i, j), or `None` if either index is out of bounds
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.order && j < self.order {
            Some(self.data[i * self.order + j])
        } else {
            None
        }
    }

    /// Iterates over the rows in order
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics; an empty buffer yields no chunks at any size
        self.data.chunks(self.order.max(1))
    }

    /// Element-wise comparison: same order and every pair of elements within `tol`.
    pub fn approx_eq_elements(&self, other: &SquareMatrix, tol: f64) -> bool {
        self.order == other.order
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// Writes the canonical text rendering (identical to `Display`) to an I/O sink
    pub fn write_to<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl Index<usize> for SquareMatrix {
    type Output = [f64];

    /// # Panics
    ///
    /// Panics if the row index is out of range. Column indexing on the
    /// returned slice is bounds-checked by the slice itself.
    fn index(&self, row: usize) -> &[f64] {
        match self.row(row) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl IndexMut<usize> for SquareMatrix {
    fn index_mut(&mut self, row: usize) -> &mut [f64] {
        match self.row_mut(row) {
            Ok(r) => r,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Index<(usize, usize)> for SquareMatrix {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        &self[i][j]
    }
}

impl IndexMut<(usize, usize)> for SquareMatrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut f64 {
        &mut self[i][j]
    }
}

impl PartialEq for SquareMatrix {
    fn eq(&self, other: &Self) -> bool {
        (self.sum() - other.sum()).abs() < constants::EPS
    }
}

impl PartialOrd for SquareMatrix {
    /// Orders by element sum. Sums that differ by at least `EPS` in
    /// magnitude but fail the strict `a < b - EPS` test on both sides
    /// (only possible right at the tolerance boundary), or NaN sums, are
    /// incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let (a, b) = (self.sum(), other.sum());
        if (a - b).abs() < constants::EPS {
            Some(Ordering::Equal)
        } else if a < b - constants::EPS {
            Some(Ordering::Less)
        } else if b < a - constants::EPS {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl fmt::Display for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            write!(f, "[ ")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            writeln!(f, " ]")?;
        }
        Ok(())
    }
}

impl fmt::Debug for SquareMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "SquareMatrix {{")?;
        writeln!(f, "  order: {}", self.order)?;
        writeln!(f, "  sum: {}", self.sum())?;

        let max_rows = MAX_DEBUG_ROWS.min(self.order);
        let max_cols = MAX_DEBUG_ELEMENTS_PER_ROW.min(self.order);

        if max_rows > 0 {
            writeln!(f, "  content sample:")?;

            for (i, row) in self.rows().take(max_rows).enumerate() {
                write!(f, "    row {}: {:?}", i, &row[..max_cols])?;
                if self.order > max_cols {
                    write!(f, " ... ({} more)", self.order - max_cols)?;
                }
                writeln!(f)?;
            }

            if self.order > max_rows {
                writeln!(f, "    ... ({} more rows)", self.order - max_rows)?;
            }
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_cell() {
        let m = SquareMatrix::new(3, 7.0).unwrap();
        assert_eq!(m.order(), 3);
        assert_eq!(m.as_slice().len(), 9);
        assert!(m.as_slice().iter().all(|&v| v == 7.0));
    }

    #[test]
    fn test_empty_matrix() {
        let z = SquareMatrix::default();
        assert_eq!(z.order(), 0);
        assert!(z.is_empty());
        assert!(z.as_slice().is_empty());
        assert_eq!(z.rows().count(), 0);
        assert_eq!(z.to_string(), "");

        assert!(SquareMatrix::new(0, 0.0).is_ok());
        assert!(matches!(
            SquareMatrix::new(0, 1.5),
            Err(MatrixError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        let empty: Vec<Vec<f64>> = Vec::new();
        assert!(matches!(
            SquareMatrix::from_rows(empty),
            Err(MatrixError::InvalidArgument(_))
        ));

        let ragged = vec![vec![1.0, 2.0], vec![3.0]];
        assert!(matches!(
            SquareMatrix::from_rows(ragged),
            Err(MatrixError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_row_major_layout() {
        let m = SquareMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(m.row(1).unwrap(), &[3.0, 4.0]);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m.get(1, 1), Some(4.0));
        assert_eq!(m.get(1, 2), None);
    }

    #[test]
    fn test_row_out_of_range() {
        let mut m = SquareMatrix::zeros(2);
        assert!(matches!(m.row(2), Err(MatrixError::OutOfRange(_))));
        assert!(matches!(m.row_mut(5), Err(MatrixError::OutOfRange(_))));
    }

    #[test]
    #[should_panic(expected = "row 5 >= order 2")]
    fn test_index_panics_on_bad_row() {
        let m = SquareMatrix::zeros(2);
        let _ = m[5][0];
    }

    #[test]
    #[should_panic]
    fn test_index_panics_on_bad_column() {
        let m = SquareMatrix::zeros(2);
        let _ = m[0][2];
    }

    #[test]
    fn test_index_mut_writes_through() {
        let mut m = SquareMatrix::zeros(3);
        m[0][1] = 42.0;
        m[(2, 0)] = -7.0;
        assert_eq!(m.get(0, 1), Some(42.0));
        assert_eq!(m.get(2, 0), Some(-7.0));
    }

    #[test]
    fn test_clone_is_deep() {
        let a = SquareMatrix::new(2, 1.0).unwrap();
        let mut b = a.clone();
        b[0][0] = 9.0;
        assert_eq!(a[0][0], 1.0);
    }

    #[test]
    fn test_display() {
        let m = SquareMatrix::from_rows([[1.0, 2.5], [-3.0, 4.0]]).unwrap();
        assert_eq!(m.to_string(), "[ 1, 2.5 ]\n[ -3, 4 ]\n");

        let mut buf = Vec::new();
        m.write_to(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), m.to_string());
    }

    #[test]
    fn test_debug_truncates() {
        let m = SquareMatrix::zeros(7);
        let text = format!("{:?}", m);
        assert!(text.contains("order: 7"));
        assert!(text.contains("(2 more)"));
        assert!(text.contains("(2 more rows)"));
    }

    #[test]
    fn test_sum_comparison() {
        let a = SquareMatrix::from_rows([[1.0, 1.0], [1.0, 1.0]]).unwrap();
        let b = SquareMatrix::from_rows([[2.0, 2.0], [2.0, 0.0]]).unwrap();
        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(a != b);
        assert_eq!(a.partial_cmp(&a), Some(Ordering::Equal));
    }

    #[test]
    fn test_nan_sum_is_incomparable() {
        let a = SquareMatrix::new(1, f64::NAN).unwrap();
        let b = SquareMatrix::zeros(1);
        assert_eq!(a.partial_cmp(&b), None);
        assert!(a != b);
        assert!(!(a < b) && !(a > b));
    }

    #[test]
    fn test_approx_eq_elements() {
        let a = SquareMatrix::from_rows([[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let b = SquareMatrix::from_rows([[4.0, 3.0], [2.0, 1.0]]).unwrap();
        assert!(a == b);
        assert!(!a.approx_eq_elements(&b, 1e-12));
        assert!(a.approx_eq_elements(&a.clone(), 0.0));
        assert!(!a.approx_eq_elements(&SquareMatrix::zeros(3), 1.0));
    }
}
