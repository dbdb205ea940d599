//! Codec Facades
//!
//! Named merge and split functions for the width pairs callers use:
//! 8 <-> 32, 8 <-> 64, 32 <-> 64 and 32 <-> 128 bits.

use entities_integers::LengthError;
use infrastructure_codec::WordCodec;

macro_rules! codec_facades {
    ($($narrow:ty => $wide:ty: $merge:ident, $merge_into:ident, $split:ident, $split_into:ident;)+) => {
        $(
            #[doc = concat!("Merge `", stringify!($narrow), "`s into `", stringify!($wide), "`s, high first")]
            pub fn $merge(source: &[$narrow]) -> Result<Vec<$wide>, LengthError> {
                WordCodec::merge(source)
            }

            #[doc = concat!("Merge `", stringify!($narrow), "`s into a caller-supplied `", stringify!($wide), "` buffer")]
            pub fn $merge_into(source: &[$narrow], output: &mut [$wide]) -> Result<(), LengthError> {
                WordCodec::merge_into(source, output)
            }

            #[doc = concat!("Split `", stringify!($wide), "`s into `", stringify!($narrow), "`s, high first")]
            pub fn $split(source: &[$wide]) -> Result<Vec<$narrow>, LengthError> {
                WordCodec::split(source)
            }

            #[doc = concat!("Split `", stringify!($wide), "`s into a caller-supplied `", stringify!($narrow), "` buffer")]
            pub fn $split_into(source: &[$wide], output: &mut [$narrow]) -> Result<(), LengthError> {
                WordCodec::split_into(source, output)
            }
        )+
    };
}

codec_facades! {
    u8 => u32: merge_u8_to_u32, merge_u8_into_u32, split_u32_to_u8, split_u32_into_u8;
    u8 => u64: merge_u8_to_u64, merge_u8_into_u64, split_u64_to_u8, split_u64_into_u8;
    u32 => u64: merge_u32_to_u64, merge_u32_into_u64, split_u64_to_u32, split_u64_into_u32;
    u32 => u128: merge_u32_to_u128, merge_u32_into_u128, split_u128_to_u32, split_u128_into_u32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_u8_to_u32() {
        assert_eq!(merge_u8_to_u32(&[0x00, 0x01, 0x02, 0x03]), Ok(vec![0x0001_0203]));
    }

    #[test]
    fn test_split_u32_to_u8() {
        assert_eq!(
            split_u32_to_u8(&[0xFFFF_FFFF, 0x0000_FFFF]),
            Ok(vec![0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0xFF, 0xFF])
        );
    }

    #[test]
    fn test_merge_u32_into_u64_rejects_odd_source() {
        let mut out = [0u64; 1];
        assert_eq!(
            merge_u32_into_u64(&[1, 2, 3], &mut out),
            Err(LengthError::NotMultiple { param: "source", multiple_of: 2, actual: 3 })
        );
    }

    #[test]
    fn test_split_u128_into_u32() {
        let mut out = [0u32; 4];
        split_u128_into_u32(&[u128::MAX - 1], &mut out).unwrap();
        assert_eq!(out, [u32::MAX, u32::MAX, u32::MAX, u32::MAX - 1]);
    }

    #[test]
    fn test_u8_u64_pair() {
        let bytes = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let words = merge_u8_to_u64(&bytes).unwrap();
        assert_eq!(words, vec![0x0102_0304_0506_0708]);

        let mut back = [0u8; 8];
        split_u64_into_u8(&words, &mut back).unwrap();
        assert_eq!(back, bytes);
    }
}
