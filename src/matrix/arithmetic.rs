//! Element-wise and matrix arithmetic
//!
//! Every binary operation has a checked form returning [`Result`] and an
//! operator form from `std::ops`. The operator traits cannot return errors,
//! so the operator forms panic with the [`MatrixError`] message when a
//! precondition fails; use the checked forms when the operands are not known
//! to be compatible.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign,
};

use crate::constants::EPS;
use crate::error::{MatrixError, Result};
use crate::matrix::SquareMatrix;

/// Fails with `InvalidArgument` unless both operands have the same order
pub fn ensure_same_order(a: &SquareMatrix, b: &SquareMatrix) -> Result<()> {
    if a.order() != b.order() {
        return Err(MatrixError::InvalidArgument(format!(
            "order mismatch: {} vs {}",
            a.order(),
            b.order()
        )));
    }
    Ok(())
}

/// Unwraps an operator result, panicking with the error message
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{}", e),
    }
}

impl SquareMatrix {
    fn map(&self, f: impl Fn(f64) -> f64) -> SquareMatrix {
        let data = self.as_slice().iter().map(|&x| f(x)).collect();
        SquareMatrix::from_raw(self.order(), data)
    }

    fn zip_with(&self, other: &SquareMatrix, f: impl Fn(f64, f64) -> f64) -> Result<SquareMatrix> {
        ensure_same_order(self, other)?;
        let data = self
            .as_slice()
            .iter()
            .zip(other.as_slice())
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(SquareMatrix::from_raw(self.order(), data))
    }

    /// Element-wise sum.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] on order mismatch.
    pub fn checked_add(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        self.zip_with(other, |a, b| a + b)
    }

    /// Element-wise difference.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] on order mismatch.
    pub fn checked_sub(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        self.zip_with(other, |a, b| a - b)
    }

    /// Matrix product `C[i][j] = Σ_k A[i][k]·B[k][j]`.
    ///
    /// The k-loop runs outside the j-loop so that both the output row and
    /// the row of `other` are walked contiguously.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] on order mismatch.
    pub fn checked_mul(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        ensure_same_order(self, other)?;

        let n = self.order();
        let a = self.as_slice();
        let b = other.as_slice();
        let mut c = vec![0.0; n * n];

        for i in 0..n {
            let c_row = &mut c[i * n..(i + 1) * n];
            for k in 0..n {
                let aik = a[i * n + k];
                let b_row = &b[k * n..(k + 1) * n];
                for (cij, &bkj) in c_row.iter_mut().zip(b_row) {
                    *cij += aik * bkj;
                }
            }
        }

        Ok(SquareMatrix::from_raw(n, c))
    }

    /// Multiplies every element by `s`
    pub fn scale(&self, s: f64) -> SquareMatrix {
        self.map(|x| s * x)
    }

    /// Divides every element by `d`.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if `|d| < EPS`.
    pub fn checked_div_scalar(&self, d: f64) -> Result<SquareMatrix> {
        if d.abs() < EPS {
            return Err(MatrixError::InvalidArgument("divide by 0".to_string()));
        }
        Ok(self.map(|x| x / d))
    }

    /// Element-wise (Hadamard) product.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] on order mismatch.
    pub fn hadamard(&self, other: &SquareMatrix) -> Result<SquareMatrix> {
        self.zip_with(other, |a, b| a * b)
    }

    /// Euclidean remainder of every element by the integer `m`.
    ///
    /// Each result lies in `[0, |m|)`, including for negative elements:
    /// the floating remainder is shifted up by `|m|` when it is negative.
    ///
    /// # Errors
    ///
    /// [`MatrixError::InvalidArgument`] if `m == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use squaremat::SquareMatrix;
    ///
    /// let m = SquareMatrix::from_rows([[2.0, 4.0], [6.0, -1.0]]).unwrap();
    /// let r = m.checked_rem_int(5).unwrap();
    /// assert_eq!(r.as_slice(), &[2.0, 4.0, 1.0, 4.0]);
    /// ```
    pub fn checked_rem_int(&self, m: i32) -> Result<SquareMatrix> {
        if m == 0 {
            return Err(MatrixError::InvalidArgument("mod 0".to_string()));
        }
        let modulus = f64::from(m).abs();
        Ok(self.map(|x| {
            let r = x.rem_euclid(modulus);
            // a tiny negative remainder plus the modulus can round up to it
            if r >= modulus {
                0.0
            } else {
                r
            }
        }))
    }

    /// Flips the sign of every element
    pub fn negate(&self) -> SquareMatrix {
        self.map(|x| -x)
    }

    /// Returns the transpose `R[j][i] = M[i][j]`
    pub fn transpose(&self) -> SquareMatrix {
        let n = self.order();
        let src = self.as_slice();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                data[j * n + i] = src[i * n + j];
            }
        }
        SquareMatrix::from_raw(n, data)
    }

    /// Adds 1 to every element in place (pre-increment)
    pub fn increment(&mut self) -> &mut Self {
        self.as_mut_slice().iter_mut().for_each(|x| *x += 1.0);
        self
    }

    /// Subtracts 1 from every element in place (pre-decrement)
    pub fn decrement(&mut self) -> &mut Self {
        self.as_mut_slice().iter_mut().for_each(|x| *x -= 1.0);
        self
    }

    /// Increments in place and returns a snapshot taken before the change
    pub fn post_increment(&mut self) -> SquareMatrix {
        let snapshot = self.clone();
        self.increment();
        snapshot
    }

    /// Decrements in place and returns a snapshot taken before the change
    pub fn post_decrement(&mut self) -> SquareMatrix {
        let snapshot = self.clone();
        self.decrement();
        snapshot
    }

    /// `self = self + rhs`; leaves `self` untouched on error
    pub fn try_add_assign(&mut self, rhs: &SquareMatrix) -> Result<()> {
        *self = self.checked_add(rhs)?;
        Ok(())
    }

    /// `self = self - rhs`; leaves `self` untouched on error
    pub fn try_sub_assign(&mut self, rhs: &SquareMatrix) -> Result<()> {
        *self = self.checked_sub(rhs)?;
        Ok(())
    }

    /// `self = self * rhs` (matrix product); leaves `self` untouched on error
    pub fn try_mul_assign(&mut self, rhs: &SquareMatrix) -> Result<()> {
        *self = self.checked_mul(rhs)?;
        Ok(())
    }

    /// `self = self * s`
    pub fn scale_assign(&mut self, s: f64) {
        *self = self.scale(s);
    }

    /// `self = self / d`; leaves `self` untouched on error
    pub fn try_div_assign(&mut self, d: f64) -> Result<()> {
        *self = self.checked_div_scalar(d)?;
        Ok(())
    }

    /// `self = self ∘ rhs` (Hadamard); leaves `self` untouched on error
    pub fn try_hadamard_assign(&mut self, rhs: &SquareMatrix) -> Result<()> {
        *self = self.hadamard(rhs)?;
        Ok(())
    }

    /// `self = self mod m`; leaves `self` untouched on error
    pub fn try_rem_assign(&mut self, m: i32) -> Result<()> {
        *self = self.checked_rem_int(m)?;
        Ok(())
    }
}

// Implements a matrix-matrix operator for every owned/borrowed combination
// by delegating to a checked method.
macro_rules! matrix_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&SquareMatrix> for &SquareMatrix {
            type Output = SquareMatrix;

            fn $method(self, rhs: &SquareMatrix) -> SquareMatrix {
                or_panic(self.$checked(rhs))
            }
        }

        impl $trait<SquareMatrix> for &SquareMatrix {
            type Output = SquareMatrix;

            fn $method(self, rhs: SquareMatrix) -> SquareMatrix {
                or_panic(self.$checked(&rhs))
            }
        }

        impl $trait<&SquareMatrix> for SquareMatrix {
            type Output = SquareMatrix;

            fn $method(self, rhs: &SquareMatrix) -> SquareMatrix {
                or_panic(self.$checked(rhs))
            }
        }

        impl $trait<SquareMatrix> for SquareMatrix {
            type Output = SquareMatrix;

            fn $method(self, rhs: SquareMatrix) -> SquareMatrix {
                or_panic(self.$checked(&rhs))
            }
        }
    };
}

// Same as above for the compound assignment form.
macro_rules! matrix_assign_op {
    ($trait:ident, $method:ident, $try_assign:ident) => {
        impl $trait<&SquareMatrix> for SquareMatrix {
            fn $method(&mut self, rhs: &SquareMatrix) {
                or_panic(self.$try_assign(rhs))
            }
        }

        impl $trait<SquareMatrix> for SquareMatrix {
            fn $method(&mut self, rhs: SquareMatrix) {
                or_panic(self.$try_assign(&rhs))
            }
        }
    };
}

matrix_binop!(Add, add, checked_add);
matrix_binop!(Sub, sub, checked_sub);
matrix_binop!(Mul, mul, checked_mul);
matrix_binop!(Rem, rem, hadamard);

matrix_assign_op!(AddAssign, add_assign, try_add_assign);
matrix_assign_op!(SubAssign, sub_assign, try_sub_assign);
matrix_assign_op!(MulAssign, mul_assign, try_mul_assign);
matrix_assign_op!(RemAssign, rem_assign, try_hadamard_assign);

impl Mul<f64> for &SquareMatrix {
    type Output = SquareMatrix;

    fn mul(self, s: f64) -> SquareMatrix {
        self.scale(s)
    }
}

impl Mul<f64> for SquareMatrix {
    type Output = SquareMatrix;

    fn mul(self, s: f64) -> SquareMatrix {
        self.scale(s)
    }
}

impl Mul<&SquareMatrix> for f64 {
    type Output = SquareMatrix;

    fn mul(self, m: &SquareMatrix) -> SquareMatrix {
        m.scale(self)
    }
}

impl Mul<SquareMatrix> for f64 {
    type Output = SquareMatrix;

    fn mul(self, m: SquareMatrix) -> SquareMatrix {
        m.scale(self)
    }
}

impl MulAssign<f64> for SquareMatrix {
    fn mul_assign(&mut self, s: f64) {
        self.scale_assign(s)
    }
}

impl Div<f64> for &SquareMatrix {
    type Output = SquareMatrix;

    /// # Panics
    ///
    /// Panics if `|d| < EPS`.
    fn div(self, d: f64) -> SquareMatrix {
        or_panic(self.checked_div_scalar(d))
    }
}

impl Div<f64> for SquareMatrix {
    type Output = SquareMatrix;

    fn div(self, d: f64) -> SquareMatrix {
        or_panic(self.checked_div_scalar(d))
    }
}

impl DivAssign<f64> for SquareMatrix {
    fn div_assign(&mut self, d: f64) {
        or_panic(self.try_div_assign(d))
    }
}

impl Rem<i32> for &SquareMatrix {
    type Output = SquareMatrix;

    /// # Panics
    ///
    /// Panics if `m == 0`.
    fn rem(self, m: i32) -> SquareMatrix {
        or_panic(self.checked_rem_int(m))
    }
}

impl Rem<i32> for SquareMatrix {
    type Output = SquareMatrix;

    fn rem(self, m: i32) -> SquareMatrix {
        or_panic(self.checked_rem_int(m))
    }
}

impl RemAssign<i32> for SquareMatrix {
    fn rem_assign(&mut self, m: i32) {
        or_panic(self.try_rem_assign(m))
    }
}

impl Neg for &SquareMatrix {
    type Output = SquareMatrix;

    fn neg(self) -> SquareMatrix {
        self.negate()
    }
}

impl Neg for SquareMatrix {
    type Output = SquareMatrix;

    fn neg(self) -> SquareMatrix {
        self.negate()
    }
}
