//! Entities Layer: Integers
//!
//! Provides the fixed-width unsigned integer primitives everything else is
//! built on:
//! - [`Word`]: the capability shared by `u8`, `u16`, `u32`, `u64` and `u128`
//! - [`Halve`] / [`Merge`]: split a word into two half-width words, or join
//!   two words into one double-width word (high half first)
//! - [`Compose`]: compile-time width ratios between any two words, built
//!   recursively from `Halve` and `Merge`
//! - [`LengthError`]: buffer length validation failures
//!
//! This crate has no dependencies and performs no allocation.

pub mod compose;
pub mod errors;
pub mod word;

pub use compose::Compose;
pub use errors::LengthError;
pub use word::{Halve, Merge, Word};
