//! Matrix module: concrete matrices exposing the capability protocol.

pub mod dense;
pub use dense::Dense;
pub mod symmetric;
pub use symmetric::SymDense;
pub mod transpose;
pub use transpose::Transpose;
pub mod triangular;
pub use triangular::TriDense;
