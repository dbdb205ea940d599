//! Entities Layer: Utilities
//!
//! Provides utility types:
//! - Big number operations
//! - Precomputed bounds for 128, 256 and 512 bit integers

pub mod big;
pub mod bounds;

pub use big::BigNumber;
pub use bounds::BigWidth;
