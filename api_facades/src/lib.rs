//! API Facades Layer
//!
//! One import surface for the whole workspace. The generic entry points of
//! the inner layers are re-exported as is; the facades add named functions
//! for each supported width pair and scaling width, so callers that do not
//! want turbofish syntax have a concrete signature to call.
//!
//! All facades call underlying Rust modules from inner layers.

pub mod array_facades;
pub mod bounds_facades;
pub mod codec_facades;
pub mod scaling_facades;

// Re-export main facade functions
pub use array_facades::*;
pub use bounds_facades::*;
pub use codec_facades::*;
pub use scaling_facades::*;

// Re-export inner layer types
pub use entities_integers::{Compose, Halve, LengthError, Merge, Word};
pub use entities_utilities::{BigNumber, BigWidth};
pub use infrastructure_codec::WordCodec;
pub use infrastructure_utilities::ArrayUtils;
pub use usecases_scaling::{scale, scale_big, scale_bounded, Scalable, ScaleError};
