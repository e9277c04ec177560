//! Determinant and integer power
//!
//! These are the two operations with real algorithmic content:
//!
//! 1. **Determinant**: Gaussian elimination with partial pivoting on a
//!    private working copy, O(n³).
//! 2. **Power**: exponentiation by repeated squaring, O(log k) matrix
//!    products.

use std::ops::{BitXor, Not};

use log::{debug, trace};
use num_traits::Pow;

use crate::constants::EPS;
use crate::error::{MatrixError, Result};
use crate::matrix::arithmetic::or_panic;
use crate::matrix::SquareMatrix;

impl SquareMatrix {
    /// Raises the matrix to the non-negative integer power `k`.
    ///
    /// `k == 0` yields the identity of the same order, even for a singular
    /// or zero matrix. Larger exponents use recursive halving:
    /// `M^k = (M^(k/2))²`, times `M` once more when `k` is odd.
    ///
    /// # Errors
    ///
    /// [`MatrixError::LogicError`] if the matrix is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let fib = SquareMatrix::from_rows([[1.0, 1.0], [1.0, 0.0]]).unwrap();
    /// let f10 = fib.power(10).unwrap();
    /// assert_eq!(f10[0][1], 55.0);
    /// ```
    pub fn power(&self, k: u32) -> Result<SquareMatrix> {
        if self.is_empty() {
            return Err(MatrixError::LogicError(
                "power of empty matrix".to_string(),
            ));
        }
        trace!("power: order {} exponent {}", self.order(), k);
        self.power_by_squaring(k)
    }

    fn power_by_squaring(&self, k: u32) -> Result<SquareMatrix> {
        match k {
            0 => Ok(SquareMatrix::identity(self.order())),
            1 => Ok(self.clone()),
            _ => {
                let half = self.power_by_squaring(k / 2)?;
                let result = half.checked_mul(&half)?;
                if k % 2 == 1 {
                    result.checked_mul(self)
                } else {
                    Ok(result)
                }
            }
        }
    }

    /// Determinant by Gaussian elimination with partial pivoting.
    ///
    /// The matrix itself is never modified. A pivot smaller than `EPS` in
    /// magnitude ends the elimination with a determinant of exactly 0, and a
    /// final result smaller than `EPS` in magnitude is snapped to 0.
    ///
    /// This is plain double precision elimination; ill-conditioned inputs
    /// are only as accurate as `f64` allows.
    ///
    /// # Errors
    ///
    /// [`MatrixError::LogicError`] if the matrix is empty.
    pub fn determinant(&self) -> Result<f64> {
        if self.is_empty() {
            return Err(MatrixError::LogicError(
                "det of empty matrix".to_string(),
            ));
        }

        let n = self.order();
        trace!("determinant: order {}", n);

        let mut a = self.as_slice().to_vec();
        let mut det = 1.0;

        for i in 0..n {
            // Largest magnitude in column i among rows i..n
            let mut max_row = i;
            for j in (i + 1)..n {
                if a[j * n + i].abs() > a[max_row * n + i].abs() {
                    max_row = j;
                }
            }

            if max_row != i {
                for k in 0..n {
                    a.swap(i * n + k, max_row * n + k);
                }
                det = -det;
            }

            let pivot = a[i * n + i];
            if pivot.abs() < EPS {
                debug!("determinant: singular pivot at column {}", i);
                return Ok(0.0);
            }

            for j in (i + 1)..n {
                let factor = a[j * n + i] / pivot;
                // columns before i are already zero in row j
                for k in i..n {
                    a[j * n + k] -= factor * a[i * n + k];
                }
            }

            det *= pivot;
        }

        if det.abs() < EPS {
            debug!("determinant: snapping {:e} to zero", det);
            det = 0.0;
        }

        Ok(det)
    }
}

impl Not for &SquareMatrix {
    type Output = f64;

    /// Determinant.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty.
    fn not(self) -> f64 {
        or_panic(self.determinant())
    }
}

impl Not for SquareMatrix {
    type Output = f64;

    fn not(self) -> f64 {
        or_panic(self.determinant())
    }
}

impl BitXor<u32> for &SquareMatrix {
    type Output = SquareMatrix;

    /// Integer power.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is empty.
    fn bitxor(self, k: u32) -> SquareMatrix {
        or_panic(self.power(k))
    }
}

impl BitXor<u32> for SquareMatrix {
    type Output = SquareMatrix;

    fn bitxor(self, k: u32) -> SquareMatrix {
        or_panic(self.power(k))
    }
}

impl Pow<u32> for &SquareMatrix {
    type Output = Result<SquareMatrix>;

    fn pow(self, k: u32) -> Result<SquareMatrix> {
        self.power(k)
    }
}
