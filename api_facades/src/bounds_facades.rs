//! Bounds Facades
//!
//! Named accessors for the precomputed minimum and maximum values of the
//! 128, 256 and 512 bit integer widths.

use entities_utilities::{BigNumber, BigWidth};

macro_rules! bound_facades {
    ($($name:ident: $width:ident.$bound:ident),+ $(,)?) => {
        $(
            #[doc = concat!("`", stringify!($bound), "` of `BigWidth::", stringify!($width), "`")]
            pub fn $name() -> &'static BigNumber {
                BigWidth::$width.$bound()
            }
        )+
    };
}

bound_facades! {
    big_uint128_max: Unsigned128.max,
    big_int128_min: Signed128.min,
    big_int128_max: Signed128.max,
    big_uint256_max: Unsigned256.max,
    big_int256_min: Signed256.min,
    big_int256_max: Signed256.max,
    big_uint512_max: Unsigned512.max,
    big_int512_min: Signed512.min,
    big_int512_max: Signed512.max,
}
