//! Symmetric dense matrix.

use crate::core::raw::{Symmetric, Uplo};
use crate::core::traits::Matrix;
use crate::error::{MatError, Result};

/// Symmetric `n × n` matrix; only the `uplo` triangle of `data` is read.
#[derive(Clone, Debug, PartialEq)]
pub struct SymDense {
    n: usize,
    uplo: Uplo,
    data: Vec<f64>,
}

impl SymDense {
    /// Construct from row-major `n * n` storage, reading the upper triangle.
    pub fn new(n: usize, data: Option<Vec<f64>>) -> Result<Self> {
        Self::with_uplo(n, Uplo::Upper, data)
    }

    pub fn with_uplo(n: usize, uplo: Uplo, data: Option<Vec<f64>>) -> Result<Self> {
        let len = n.checked_mul(n).ok_or(MatError::Allocation(usize::MAX))?;
        let data = match data {
            Some(d) if d.len() != len => return Err(MatError::Shape { expected: len, found: d.len() }),
            Some(d) => d,
            None => vec![0.0; len],
        };
        Ok(Self { n, uplo, data })
    }

    /// Set both `(i, j)` and `(j, i)`.
    pub fn set_sym(&mut self, i: usize, j: usize, v: f64) {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range");
        self.data[i * self.n + j] = v;
        self.data[j * self.n + i] = v;
    }

    fn raw(&self) -> Symmetric<'_, f64> {
        Symmetric { n: self.n, stride: self.n, uplo: self.uplo, data: &self.data }
    }
}

impl Matrix for SymDense {
    fn dims(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range");
        self.raw().at(i, j)
    }

    fn raw_symmetric(&self) -> Option<Symmetric<'_, f64>> {
        Some(self.raw())
    }
}
