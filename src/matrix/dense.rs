//! Dense matrices: a row-major `Dense` type and the `faer::Mat<f64>` bridge.
//!
//! `Dense` exposes its buffer directly, so products go through `gemv`.
//! Faer matrices are column-major with their own strides; they are offered
//! to `Vector::mul_vec` as row/column streams instead.

use faer::Mat;

use crate::core::raw::General;
use crate::core::traits::{Matrix, RowColumnStream};
use crate::error::{MatError, Result};
use crate::matrix::Transpose;

/// Row-major dense matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Dense {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Dense {
    /// Construct from row-major storage of exactly `rows * cols` elements,
    /// or zero-filled when `data` is `None`.
    pub fn new(rows: usize, cols: usize, data: Option<Vec<f64>>) -> Result<Self> {
        let len = rows.checked_mul(cols).ok_or(MatError::Allocation(usize::MAX))?;
        let data = match data {
            Some(d) if d.len() != len => return Err(MatError::Shape { expected: len, found: d.len() }),
            Some(d) => d,
            None => vec![0.0; len],
        };
        Ok(Self { rows, cols, data })
    }

    pub fn from_fn(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f64) -> Self {
        let data = (0..rows * cols).map(|k| f(k / cols, k % cols)).collect();
        Self { rows, cols, data }
    }

    /// Copy a faer matrix into row-major storage.
    pub fn from_faer(m: &Mat<f64>) -> Self {
        Self::from_fn(m.nrows(), m.ncols(), |i, j| m[(i, j)])
    }

    pub fn set(&mut self, i: usize, j: usize, v: f64) {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range");
        self.data[i * self.cols + j] = v;
    }

    pub fn t(&self) -> Transpose<'_> {
        Transpose(self)
    }
}

impl Matrix for Dense {
    fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows && j < self.cols, "index ({i}, {j}) out of range");
        self.data[i * self.cols + j]
    }

    fn raw_matrix(&self) -> Option<General<'_, f64>> {
        Some(General { rows: self.rows, cols: self.cols, stride: self.cols, data: &self.data })
    }

    fn as_stream(&self) -> Option<&dyn RowColumnStream> {
        Some(self)
    }
}

impl RowColumnStream for Dense {
    fn row(&self, dst: &mut [f64], i: usize) {
        dst.copy_from_slice(&self.data[i * self.cols..(i + 1) * self.cols]);
    }

    fn col(&self, dst: &mut [f64], j: usize) {
        for (i, d) in dst.iter_mut().enumerate() {
            *d = self.data[i * self.cols + j];
        }
    }
}

impl Matrix for Mat<f64> {
    fn dims(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self[(i, j)]
    }

    fn as_stream(&self) -> Option<&dyn RowColumnStream> {
        Some(self)
    }
}

impl RowColumnStream for Mat<f64> {
    fn row(&self, dst: &mut [f64], i: usize) {
        for (j, d) in dst.iter_mut().enumerate() {
            *d = self[(i, j)];
        }
    }

    fn col(&self, dst: &mut [f64], j: usize) {
        for (i, d) in dst.iter_mut().enumerate() {
            *d = self[(i, j)];
        }
    }
}
