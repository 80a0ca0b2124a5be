//! colvec: strided dense column vectors over a BLAS-style kernel layer
//!
//! This crate provides a `Vector` type whose arithmetic stays correct when the
//! destination is also an operand, views that share storage with their parent,
//! and a matrix-vector product that picks the cheapest kernel a matrix's
//! exposed capabilities allow.

pub mod config;
pub mod core;
pub mod error;
pub mod kernel;
pub mod matrix;
pub mod vector;
pub mod workspace;

// Re-exports for convenience
pub use crate::config::*;
pub use crate::core::*;
pub use crate::error::*;
pub use crate::matrix::*;
pub use crate::vector::*;
