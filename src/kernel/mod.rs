//! Strided numeric kernels in the style of BLAS levels 1 and 2.
//!
//! Kernels overwrite their output argument in place and assume shapes have
//! already been validated by the caller.

pub mod level1;
pub mod level2;

pub use level1::{axpy, axpy_unitary_to, copy, dot, scal};
pub use level2::{gemv, symv, trmv};
