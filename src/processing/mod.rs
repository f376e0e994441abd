//! Subnet processing logic.
//!
//! - [`split`] - Partitioning an address space into equal subnets

mod split;

// Re-export public functions
pub use split::{extra_bits, split_subnets, Subnets};
