//! Dense row-major matrix with value semantics
//!
//! Matrices here are small (rotation and transform work never exceeds 4x4)
//! but the type is dimension-generic. Every operation returns a fresh value;
//! nothing is shared or aliased.
//!
//! Malformed call sites (bad dimensions, out-of-range indices, incompatible
//! shapes, singular input to [`Matrix::inverse`]) are programmer errors. The
//! checked constructors and methods report them as [`MatrixError`]; the
//! operator and index impls panic with the same message.

use std::fmt;
use std::ops::{Add, Index, IndexMut, Mul, Sub};

/// Error type for matrix operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixError {
    /// Non-positive dimension at construction
    InvalidSize,
    /// Dimension product exceeds the representable element count
    Overflow,
    /// Linear or 2D index outside the matrix bounds
    OutOfRange,
    /// Operand shapes incompatible for the requested operation
    ShapeMismatch,
    /// Exact zero pivot encountered during inversion
    Singular,
}

impl fmt::Display for MatrixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixError::InvalidSize => write!(f, "matrix dimensions must be greater than 0"),
            MatrixError::Overflow => write!(f, "matrix dimensions are too large"),
            MatrixError::OutOfRange => write!(f, "matrix index out of range"),
            MatrixError::ShapeMismatch => write!(f, "matrix shapes are incompatible"),
            MatrixError::Singular => write!(f, "matrix is singular"),
        }
    }
}

impl std::error::Error for MatrixError {}

/// Row-major 2D float container
///
/// Invariant: `rows * cols == data.len()`, with both dimensions at least 1.
/// Equality is value-based (same shape, same elements).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// Create a zero-initialized `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidSize);
        }
        let len = rows.checked_mul(cols).ok_or(MatrixError::Overflow)?;
        if len > isize::MAX as usize / std::mem::size_of::<f32>() {
            return Err(MatrixError::Overflow);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Create a matrix taking ownership of `data` in row-major order.
    ///
    /// Fails with `ShapeMismatch` when `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, MatrixError> {
        if rows == 0 || cols == 0 {
            return Err(MatrixError::InvalidSize);
        }
        let len = rows.checked_mul(cols).ok_or(MatrixError::Overflow)?;
        if data.len() != len {
            return Err(MatrixError::ShapeMismatch);
        }
        Ok(Self { rows, cols, data })
    }

    /// The `n x n` identity matrix.
    ///
    /// # Panics
    /// Panics when `n == 0`, the same error class as the panicking operators.
    pub fn identity(n: usize) -> Self {
        let mut ret = match Self::new(n, n) {
            Ok(m) => m,
            Err(e) => panic!("identity: {}", e),
        };
        for i in 0..n {
            ret[(i, i)] = 1.0;
        }
        ret
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Flat row-major element slice.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Element at linear index `i`.
    pub fn get(&self, i: usize) -> Result<f32, MatrixError> {
        self.data.get(i).copied().ok_or(MatrixError::OutOfRange)
    }

    /// Element at `(row, col)`.
    pub fn at(&self, row: usize, col: usize) -> Result<f32, MatrixError> {
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfRange);
        }
        Ok(self.data[row * self.cols + col])
    }

    /// Element-wise sum; `ShapeMismatch` when shapes differ.
    pub fn checked_add(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != right.rows || self.cols != right.cols {
            return Err(MatrixError::ShapeMismatch);
        }
        let data = self
            .data
            .iter()
            .zip(&right.data)
            .map(|(a, b)| a + b)
            .collect();
        Matrix::from_vec(self.rows, self.cols, data)
    }

    /// Element-wise difference; `ShapeMismatch` when shapes differ.
    pub fn checked_sub(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        if self.rows != right.rows || self.cols != right.cols {
            return Err(MatrixError::ShapeMismatch);
        }
        let data = self
            .data
            .iter()
            .zip(&right.data)
            .map(|(a, b)| a - b)
            .collect();
        Matrix::from_vec(self.rows, self.cols, data)
    }

    /// Standard matrix product; `ShapeMismatch` when `self.cols != right.rows`.
    pub fn checked_mul(&self, right: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != right.rows {
            return Err(MatrixError::ShapeMismatch);
        }
        let mut ret = Matrix::new(self.rows, right.cols)?;
        for row in 0..self.rows {
            for col in 0..right.cols {
                let mut acc = 0.0;
                for i in 0..self.cols {
                    acc += self.data[row * self.cols + i] * right.data[i * right.cols + col];
                }
                ret.data[row * right.cols + col] = acc;
            }
        }
        Ok(ret)
    }

    /// Scale every element by `k`.
    pub fn scale(&self, k: f32) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(|v| v * k).collect(),
        }
    }

    /// The `cols x rows` transpose.
    pub fn transpose(&self) -> Matrix {
        let mut ret = Matrix {
            rows: self.cols,
            cols: self.rows,
            data: vec![0.0; self.data.len()],
        };
        for row in 0..self.rows {
            for col in 0..self.cols {
                ret.data[col * self.rows + row] = self.data[row * self.cols + col];
            }
        }
        ret
    }

    /// Invert a square matrix by Gauss-Jordan elimination.
    ///
    /// Pivots are taken from the diagonal only (no row swapping), and the
    /// singularity test is an exact `== 0.0` on each pivot. A matrix such as
    /// `[[0, 1], [1, 0]]` is therefore reported `Singular` even though it is
    /// invertible; callers in this codebase only invert well-conditioned
    /// view/transform matrices.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::ShapeMismatch);
        }
        let n = self.rows;
        let mut mat = self.clone();
        let mut ret = Matrix::identity(n);
        for y in 0..n {
            let pivot = mat.data[y * n + y];
            if pivot == 0.0 {
                return Err(MatrixError::Singular);
            }
            let scale_to_1 = 1.0 / pivot;
            for x in 0..n {
                mat.data[y * n + x] *= scale_to_1;
                ret.data[y * n + x] *= scale_to_1;
            }
            for yy in 0..n {
                if yy == y {
                    continue;
                }
                let scale_to_0 = mat.data[yy * n + y];
                for x in 0..n {
                    mat.data[yy * n + x] -= mat.data[y * n + x] * scale_to_0;
                    ret.data[yy * n + x] -= ret.data[y * n + x] * scale_to_0;
                }
            }
        }
        Ok(ret)
    }
}

impl Index<usize> for Matrix {
    type Output = f32;

    fn index(&self, i: usize) -> &f32 {
        match self.data.get(i) {
            Some(v) => v,
            None => panic!("{}", MatrixError::OutOfRange),
        }
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, i: usize) -> &mut f32 {
        match self.data.get_mut(i) {
            Some(v) => v,
            None => panic!("{}", MatrixError::OutOfRange),
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &f32 {
        if row >= self.rows || col >= self.cols {
            panic!("{}", MatrixError::OutOfRange);
        }
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f32 {
        if row >= self.rows || col >= self.cols {
            panic!("{}", MatrixError::OutOfRange);
        }
        &mut self.data[row * self.cols + col]
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, right: Matrix) -> Matrix {
        match self.checked_add(&right) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, right: Matrix) -> Matrix {
        match self.checked_sub(&right) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, right: Matrix) -> Matrix {
        match self.checked_mul(&right) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, right: &Matrix) -> Matrix {
        match self.checked_mul(right) {
            Ok(m) => m,
            Err(e) => panic!("{}", e),
        }
    }
}

impl Mul<f32> for Matrix {
    type Output = Matrix;

    fn mul(self, k: f32) -> Matrix {
        self.scale(k)
    }
}

impl Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, k: f32) -> Matrix {
        self.scale(k)
    }
}

impl fmt::Display for Matrix {
    /// Row vectors and column vectors print on a single line; everything
    /// else prints one row per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 1 || self.cols == 1 {
            for (i, v) in self.data.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:6.2}", v)?;
            }
            Ok(())
        } else {
            for row in 0..self.rows {
                for col in 0..self.cols {
                    if col > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:6.2}", self.data[row * self.cols + col])?;
                }
                if row + 1 < self.rows {
                    writeln!(f)?;
                }
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_creation() {
        assert_eq!(Matrix::new(0, 0).unwrap_err(), MatrixError::InvalidSize);
        assert_eq!(Matrix::new(1, 0).unwrap_err(), MatrixError::InvalidSize);
        assert_eq!(Matrix::new(0, 1).unwrap_err(), MatrixError::InvalidSize);
        assert_eq!(
            Matrix::new(usize::MAX, 2).unwrap_err(),
            MatrixError::Overflow
        );

        let mat = Matrix::new(2, 3).unwrap();
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 3);
        assert_eq!(mat[0], 0.0);
        assert_eq!(mat[(0, 0)], 0.0);
    }

    #[test]
    fn test_element_access() {
        let mut mat = Matrix::new(2, 3).unwrap();
        mat[0] = 55.0;
        mat[(1, 1)] = 66.0;
        assert_eq!(mat[0], 55.0);
        assert_eq!(mat[(1, 1)], 66.0);
        assert_eq!(mat.get(4).unwrap(), 66.0);
        assert_eq!(mat.get(6).unwrap_err(), MatrixError::OutOfRange);
        assert_eq!(mat.at(2, 0).unwrap_err(), MatrixError::OutOfRange);
        assert_eq!(mat.at(1, 3).unwrap_err(), MatrixError::OutOfRange);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_linear_index_out_of_range_panics() {
        let mat = Matrix::new(2, 3).unwrap();
        let _ = mat[6];
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_2d_index_out_of_range_panics() {
        let mat = Matrix::new(2, 3).unwrap();
        let _ = mat[(1, 3)];
    }

    #[test]
    fn test_from_vec() {
        let mat = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(mat[2], 3.0);
        assert_eq!(mat[(0, 2)], 3.0);
        assert_eq!(mat[4], 5.0);
        assert_eq!(mat[(1, 1)], 5.0);

        assert_eq!(
            Matrix::from_vec(2, 3, vec![1.0; 5]).unwrap_err(),
            MatrixError::ShapeMismatch
        );
    }

    #[test]
    fn test_value_equality() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let c = Matrix::from_vec(4, 1, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_identity() {
        let i = Matrix::identity(3);
        assert_eq!(i[(0, 0)], 1.0);
        assert_eq!(i[(0, 1)], 0.0);
        assert_eq!(i[(1, 1)], 1.0);
        assert_eq!(i[(2, 2)], 1.0);
    }

    #[test]
    fn test_add() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(2, 3, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let mat = a + b;
        assert_eq!(mat[0], 8.0);
        assert_eq!(mat[5], 18.0);
    }

    #[test]
    fn test_sub() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(2, 3, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let mat = a - b;
        assert_eq!(mat[0], -6.0);
        assert_eq!(mat[5], -6.0);
    }

    #[test]
    fn test_shape_mismatch_add() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(3, 2).unwrap();
        assert_eq!(a.checked_add(&b).unwrap_err(), MatrixError::ShapeMismatch);
    }

    #[test]
    fn test_scalar_mul() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mat = a * 3.0;
        assert_eq!(mat[0], 3.0);
        assert_eq!(mat[5], 18.0);
    }

    #[test]
    fn test_mul() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mat = a * b;
        assert_eq!(mat.rows(), 2);
        assert_eq!(mat.cols(), 2);
        assert_eq!(mat[0], 22.0);
        assert_eq!(mat[3], 64.0);
    }

    #[test]
    fn test_mul_shape_mismatch() {
        let a = Matrix::new(2, 3).unwrap();
        let b = Matrix::new(2, 3).unwrap();
        assert_eq!(a.checked_mul(&b).unwrap_err(), MatrixError::ShapeMismatch);
    }

    #[test]
    fn test_mul_associative() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = Matrix::from_vec(2, 2, vec![9.0, 10.0, 11.0, 12.0]).unwrap();
        let left = (a.clone() * b.clone()) * c.clone();
        let right = a * (b * c);
        for i in 0..4 {
            assert!(approx_eq(left[i], right[i]));
        }
    }

    #[test]
    fn test_identity_mul() {
        let m = Matrix::from_vec(3, 2, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let prod = Matrix::identity(3) * m.clone();
        assert_eq!(prod, m);
    }

    #[test]
    fn test_transpose() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let mat = a.transpose();
        assert_eq!(mat.rows(), 3);
        assert_eq!(mat.cols(), 2);
        assert_eq!(mat[0], 1.0);
        assert_eq!(mat[1], 4.0);
    }

    #[test]
    fn test_transpose_involution() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn test_inverse() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let mat = a.inverse().unwrap();
        assert!(approx_eq(mat[(0, 0)], -2.0));
        assert!(approx_eq(mat[(0, 1)], 1.0));
        assert!(approx_eq(mat[(1, 0)], 1.5));
        assert!(approx_eq(mat[(1, 1)], -0.5));
    }

    #[test]
    fn test_inverse_times_original_is_identity() {
        // det = 6, all elimination pivots non-zero
        let a = Matrix::from_vec(3, 3, vec![2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 2.0]).unwrap();
        let prod = a.clone() * a.inverse().unwrap();
        let i = Matrix::identity(3);
        for idx in 0..9 {
            assert!(approx_eq(prod[idx], i[idx]), "cell {} = {}", idx, prod[idx]);
        }
    }

    #[test]
    fn test_inverse_errors() {
        let not_square = Matrix::new(2, 3).unwrap();
        assert_eq!(not_square.inverse().unwrap_err(), MatrixError::ShapeMismatch);

        // Invertible, but the zero leading pivot trips the exact check.
        let zero_pivot = Matrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(zero_pivot.inverse().unwrap_err(), MatrixError::Singular);

        // Rank-deficient (det = 0): elimination reaches a zero pivot.
        let rank_deficient =
            Matrix::from_vec(3, 3, vec![2.0, 0.0, 1.0, 1.0, 3.0, 2.0, 1.0, 1.0, 1.0]).unwrap();
        assert_eq!(rank_deficient.inverse().unwrap_err(), MatrixError::Singular);
    }

    #[test]
    fn test_display() {
        let vec = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        let line = format!("{}", vec);
        assert!(!line.contains('\n'));

        let mat = Matrix::identity(2);
        let grid = format!("{}", mat);
        assert_eq!(grid.lines().count(), 2);
    }

    #[test]
    fn test_error_display() {
        assert!(format!("{}", MatrixError::Singular).contains("singular"));
        assert!(format!("{}", MatrixError::OutOfRange).contains("out of range"));
    }
}
