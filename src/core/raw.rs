//! Borrowed raw buffer descriptors handed to the kernel layer.
//!
//! Vectors are described by a [`Strided`] view over a slice of `Cell`s, so a
//! destination may share storage with its operands without any borrow
//! conflict. Matrices are read-only and expose plain row-major slices.

use std::cell::Cell;
use std::fmt;

/// Whether a kernel applies `A` or `Aᵀ`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Trans {
    NoTrans,
    Trans,
}

impl Trans {
    pub fn from_flag(transposed: bool) -> Self {
        if transposed { Trans::Trans } else { Trans::NoTrans }
    }
}

/// Which triangle of a symmetric or triangular buffer is referenced.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Uplo {
    Upper,
    Lower,
}

/// Whether the diagonal of a triangular buffer is implicitly one.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Diag {
    NonUnit,
    Unit,
}

/// Strided vector: logical element `i` lives at `data[i * inc]`.
#[derive(Copy, Clone)]
pub struct Strided<'a, T> {
    pub inc: usize,
    pub data: &'a [Cell<T>],
}

impl<'a, T: Copy> Strided<'a, T> {
    /// Unit-stride view over a slice of cells.
    pub fn unit(data: &'a [Cell<T>]) -> Self {
        Self { inc: 1, data }
    }

    #[inline]
    pub fn get(&self, i: usize) -> T {
        self.data[i * self.inc].get()
    }

    #[inline]
    pub fn set(&self, i: usize, v: T) {
        self.data[i * self.inc].set(v)
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Strided<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strided")
            .field("inc", &self.inc)
            .field("data", &self.data)
            .finish()
    }
}

/// Dense row-major matrix: element `(i, j)` lives at `data[i * stride + j]`.
#[derive(Copy, Clone, Debug)]
pub struct General<'a, T> {
    pub rows: usize,
    pub cols: usize,
    pub stride: usize,
    pub data: &'a [T],
}

/// Symmetric `n × n` matrix stored row-major; only the `uplo` triangle is read.
#[derive(Copy, Clone, Debug)]
pub struct Symmetric<'a, T> {
    pub n: usize,
    pub stride: usize,
    pub uplo: Uplo,
    pub data: &'a [T],
}

impl<T: Copy> Symmetric<'_, T> {
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        let (i, j) = match self.uplo {
            Uplo::Upper if i > j => (j, i),
            Uplo::Lower if i < j => (j, i),
            _ => (i, j),
        };
        self.data[i * self.stride + j]
    }
}

/// Triangular `n × n` matrix stored row-major; only the `uplo` triangle is read.
#[derive(Copy, Clone, Debug)]
pub struct Triangular<'a, T> {
    pub n: usize,
    pub stride: usize,
    pub uplo: Uplo,
    pub diag: Diag,
    pub data: &'a [T],
}
