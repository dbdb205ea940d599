//! Infrastructure Layer: Word Codec
//!
//! Converts buffers of narrow unsigned integers into buffers of wider
//! unsigned integers and back, most significant word first.
//!
//! ## Overview
//!
//! - **merge**: every group of `RATIO` narrow words becomes one wide word.
//!   The source length must be a multiple of the ratio.
//! - **split**: every wide word becomes `RATIO` narrow words.
//!
//! The `_into` forms write into a caller-supplied buffer of exactly the
//! right length and validate every length before writing anything. The
//! plain forms allocate the output.
//!
//! Supported pairs are every combination of `u8`, `u16`, `u32`, `u64` and
//! `u128` where the wide width is a multiple of the narrow one, as described
//! by [`entities_integers::Compose`].
//!
//! ## See Also
//!
//! - [`entities_integers`]: `Word`, `Halve`, `Merge` and `Compose`

pub mod word_codec;

pub use word_codec::{split_len, WordCodec};

pub use entities_integers::LengthError;
