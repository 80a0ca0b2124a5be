//! Core abstractions: the matrix capability protocol and raw buffer descriptors.

pub mod raw;
pub mod traits;

pub use raw::{Diag, General, Strided, Symmetric, Trans, Triangular, Uplo};
pub use traits::{Capabilities, Matrix, RowColumnStream};
