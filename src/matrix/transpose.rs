//! Implicit transpose wrapper.

use crate::core::traits::Matrix;

/// Presents the wrapped matrix as its transpose without copying.
///
/// `Vector::mul_vec` strips the wrapper and passes a transpose flag to the
/// kernels instead of going through `at`.
#[derive(Copy, Clone)]
pub struct Transpose<'a>(pub &'a dyn Matrix);

impl Matrix for Transpose<'_> {
    fn dims(&self) -> (usize, usize) {
        let (r, c) = self.0.dims();
        (c, r)
    }

    fn at(&self, i: usize, j: usize) -> f64 {
        self.0.at(j, i)
    }

    fn untransposed(&self) -> Option<&dyn Matrix> {
        Some(self.0)
    }
}
