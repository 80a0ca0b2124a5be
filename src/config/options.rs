//! Tuning options for the scratch workspace pool.
//!
//! This module provides the `PoolOptions` struct, which controls how many
//! scratch buffers each thread keeps around between matrix-vector products
//! and whether loaned buffers are cleared before use.

/// Workspace pool sizing & loan behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolOptions {
    /// Maximum number of idle buffers retained per power-of-two size class
    pub max_per_class: usize,

    /// Zero-fill buffers when they are loaned out
    pub zero_on_loan: bool,
}

impl Default for PoolOptions {
    fn default() -> Self {
        Self { max_per_class: 8, zero_on_loan: false }
    }
}
