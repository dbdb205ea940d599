//! Infrastructure Layer: Utilities
//!
//! Provides buffer helpers over fixed-width words: equality, emptiness,
//! in-place XOR and cryptographically secure random fill.
//! Depends on Entities layer only (dependencies flow inward).

pub mod array;

pub use array::ArrayUtils;
