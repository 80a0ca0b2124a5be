//! Configuration structs.

pub mod options;
pub use options::PoolOptions;
