//! Triangular dense matrix.

use crate::core::raw::{Diag, Triangular, Uplo};
use crate::core::traits::Matrix;
use crate::error::{MatError, Result};
use crate::matrix::Transpose;

/// Triangular `n × n` matrix; entries outside the `uplo` triangle read as zero.
#[derive(Clone, Debug, PartialEq)]
pub struct TriDense {
    n: usize,
    uplo: Uplo,
    diag: Diag,
    data: Vec<f64>,
}

impl TriDense {
    /// Construct from row-major `n * n` storage with a stored diagonal.
    pub fn new(n: usize, uplo: Uplo, data: Option<Vec<f64>>) -> Result<Self> {
        let len = n.checked_mul(n).ok_or(MatError::Allocation(usize::MAX))?;
        let data = match data {
            Some(d) if d.len() != len => return Err(MatError::Shape { expected: len, found: d.len() }),
            Some(d) => d,
            None => vec![0.0; len],
        };
        Ok(Self { n, uplo, diag: Diag::NonUnit, data })
    }

    /// Treat the diagonal as implicitly one, ignoring the stored values.
    pub fn with_unit_diag(mut self) -> Self {
        self.diag = Diag::Unit;
        self
    }

    pub fn t(&self) -> Transpose<'_> {
        Transpose(self)
    }

    fn in_triangle(&self, i: usize, j: usize) -> bool {
        match self.uplo {
            Uplo::Upper => i <= j,
            Uplo::Lower => i >= j,
        }
    }
}

impl Matrix for TriDense {
    fn dims(&self) -> (usize, usize) {
        (self.n, self.n)
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.n && j < self.n, "index ({i}, {j}) out of range");
        if i == j && self.diag == Diag::Unit {
            1.0
        } else if self.in_triangle(i, j) {
            self.data[i * self.n + j]
        } else {
            0.0
        }
    }

    fn raw_triangular(&self) -> Option<Triangular<'_, f64>> {
        Some(Triangular {
            n: self.n,
            stride: self.n,
            uplo: self.uplo,
            diag: self.diag,
            data: &self.data,
        })
    }
}
