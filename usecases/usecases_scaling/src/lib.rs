//! Use Cases Layer: Scaling
//!
//! Linearly remaps a value from a domain `[min_n, max_n]` onto a range
//! `[min_r, max_r]` that lies inside it:
//!
//! ```text
//! result = min_r + (src - min_n) * (max_r - min_r) / (max_n - min_n)
//! ```
//!
//! Values already inside the range are returned unchanged. Native integer
//! arithmetic is tried first; on actual overflow the computation is redone
//! in a wider native type, and failing that with arbitrary precision
//! [`BigNumber`](entities_utilities::BigNumber)s.
//!
//! ## Entry points
//!
//! - [`scale`]: any native integer implementing [`Scalable`]
//! - [`scale_big`]: arbitrary precision reference implementation
//! - [`scale_bounded`]: arbitrary precision, restricted to a
//!   [`BigWidth`](entities_utilities::BigWidth) such as signed 256 bit

pub mod scaler;

pub use scaler::{scale, scale_big, scale_bounded, ScaleError, Scalable};
