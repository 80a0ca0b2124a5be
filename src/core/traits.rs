//! Core linear-algebra traits for colvec.

use bitflags::bitflags;

use crate::core::raw::{General, Symmetric, Triangular};
use crate::vector::Vector;

bitflags! {
    /// Structural capabilities a matrix may expose to `Vector::mul_vec`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Capabilities: u32 {
        const VECTOR     = 0b0_0001;
        const SYMMETRIC  = 0b0_0010;
        const TRIANGULAR = 0b0_0100;
        const DENSE      = 0b0_1000;
        const STREAM     = 0b1_0000;
    }
}

/// Bulk row/column access into a caller-provided buffer.
pub trait RowColumnStream {
    /// Copy row `i` into `dst`, which has length `ncols`.
    fn row(&self, dst: &mut [f64], i: usize);
    /// Copy column `j` into `dst`, which has length `nrows`.
    fn col(&self, dst: &mut [f64], j: usize);
}

/// A read-only matrix of unknown concrete representation.
///
/// Only `dims` and `at` are required. Every other method advertises an
/// optional capability; the defaults expose nothing, which sends
/// `Vector::mul_vec` down the element-by-element fallback.
pub trait Matrix {
    /// (rows, cols)
    fn dims(&self) -> (usize, usize);

    /// Element at row `i`, column `j`. Panics if out of range.
    fn at(&self, i: usize, j: usize) -> f64;

    /// The wrapped matrix, if `self` is an implicit transpose.
    fn untransposed(&self) -> Option<&dyn Matrix> {
        None
    }

    fn as_vector(&self) -> Option<&Vector> {
        None
    }

    fn raw_symmetric(&self) -> Option<Symmetric<'_, f64>> {
        None
    }

    fn raw_triangular(&self) -> Option<Triangular<'_, f64>> {
        None
    }

    fn raw_matrix(&self) -> Option<General<'_, f64>> {
        None
    }

    fn as_stream(&self) -> Option<&dyn RowColumnStream> {
        None
    }

    /// Summary of the capabilities above.
    fn capabilities(&self) -> Capabilities {
        let mut caps = Capabilities::empty();
        caps.set(Capabilities::VECTOR, self.as_vector().is_some());
        caps.set(Capabilities::SYMMETRIC, self.raw_symmetric().is_some());
        caps.set(Capabilities::TRIANGULAR, self.raw_triangular().is_some());
        caps.set(Capabilities::DENSE, self.raw_matrix().is_some());
        caps.set(Capabilities::STREAM, self.as_stream().is_some());
        caps
    }
}

/// Strip one level of implicit transpose, reporting whether one was present.
pub fn untranspose(a: &dyn Matrix) -> (&dyn Matrix, bool) {
    match a.untransposed() {
        Some(inner) => (inner, true),
        None => (a, false),
    }
}
