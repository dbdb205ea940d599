//! Scaling Facades
//!
//! Named min-max scaling functions for the native widths and the fixed big
//! widths (128, 256 and 512 bits, signed and unsigned).

use entities_utilities::{BigNumber, BigWidth};
use usecases_scaling::{scale, scale_big, scale_bounded, ScaleError};

macro_rules! native_scaling_facades {
    ($($name:ident: $ty:ty),+ $(,)?) => {
        $(
            #[doc = concat!("Scale a `", stringify!($ty), "` from `[min_n, max_n]` onto `[min_r, max_r]`")]
            pub fn $name(src: $ty, min_n: $ty, max_n: $ty, min_r: $ty, max_r: $ty) -> Result<$ty, ScaleError> {
                scale(src, min_n, max_n, min_r, max_r)
            }
        )+
    };
}

native_scaling_facades! {
    scale_u8: u8,
    scale_i8: i8,
    scale_u16: u16,
    scale_i16: i16,
    scale_u32: u32,
    scale_i32: i32,
    scale_u64: u64,
    scale_i64: i64,
    scale_u128: u128,
    scale_i128: i128,
}

macro_rules! bounded_scaling_facades {
    ($($name:ident: $width:expr),+ $(,)?) => {
        $(
            #[doc = concat!("Scale a big number whose operands must all fit `", stringify!($width), "`")]
            pub fn $name(
                src: &BigNumber,
                min_n: &BigNumber,
                max_n: &BigNumber,
                min_r: &BigNumber,
                max_r: &BigNumber,
            ) -> Result<BigNumber, ScaleError> {
                scale_bounded($width, src, min_n, max_n, min_r, max_r)
            }
        )+
    };
}

bounded_scaling_facades! {
    scale_unsigned_128: BigWidth::Unsigned128,
    scale_signed_128: BigWidth::Signed128,
    scale_unsigned_256: BigWidth::Unsigned256,
    scale_signed_256: BigWidth::Signed256,
    scale_unsigned_512: BigWidth::Unsigned512,
    scale_signed_512: BigWidth::Signed512,
}

/// Scale arbitrary precision operands with no width restriction
pub fn scale_unbounded(
    src: &BigNumber,
    min_n: &BigNumber,
    max_n: &BigNumber,
    min_r: &BigNumber,
    max_r: &BigNumber,
) -> Result<BigNumber, ScaleError> {
    scale_big(src, min_n, max_n, min_r, max_r)
}
