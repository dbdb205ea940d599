//! Fixed-Width Words
//!
//! Scalar operations on unsigned integers of 8, 16, 32, 64 and 128 bits.
//! All byte order is big-endian in the sense that the first (left) value of
//! a pair always occupies the most significant bits.

use std::fmt::Debug;
use std::ops::BitXor;

/// A fixed-width unsigned integer
pub trait Word: Copy + Eq + Default + Debug + BitXor<Output = Self> {
    /// Width in bits
    const BITS: u32;
    /// The all-zero value
    const ZERO: Self;
}

/// Split a word into its high and low halves
pub trait Halve: Word {
    /// Word of half the width
    type Half: Word;

    /// Returns `(high, low)`
    ///
    /// # Examples
    /// ```
    /// use entities_integers::Halve;
    ///
    /// assert_eq!(0xDEADC0DEu32.halve(), (0xDEAD, 0xC0DE));
    /// ```
    fn halve(self) -> (Self::Half, Self::Half);
}

/// Join two words into one of double width
pub trait Merge: Word {
    /// Word of double the width
    type Double: Word;

    /// `self` becomes the high bits, `low` the low bits
    ///
    /// # Examples
    /// ```
    /// use entities_integers::Merge;
    ///
    /// assert_eq!(0xDEADu16.merge(0xC0DE), 0xDEADC0DE);
    /// ```
    fn merge(self, low: Self) -> Self::Double;
}

macro_rules! impl_word {
    ($($t:ty),+) => {
        $(
            impl Word for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
            }
        )+
    };
}

macro_rules! impl_halve_merge {
    ($($wide:ty => $half:ty),+) => {
        $(
            impl Halve for $wide {
                type Half = $half;

                #[inline]
                fn halve(self) -> ($half, $half) {
                    ((self >> <$half>::BITS) as $half, self as $half)
                }
            }

            impl Merge for $half {
                type Double = $wide;

                #[inline]
                fn merge(self, low: $half) -> $wide {
                    (self as $wide) << <$half>::BITS | low as $wide
                }
            }
        )+
    };
}

impl_word!(u8, u16, u32, u64, u128);
impl_halve_merge!(u16 => u8, u32 => u16, u64 => u32, u128 => u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_halve_u16() {
        assert_eq!(0xFFFFu16.halve(), (0xFF, 0xFF));
        assert_eq!(0x1234u16.halve(), (0x12, 0x34));
    }

    #[test]
    fn test_halve_u32() {
        assert_eq!(0xFFFF_FFFFu32.halve(), (0xFFFF, 0xFFFF));
        assert_eq!(0x0001_0203u32.halve(), (0x0001, 0x0203));
    }

    #[test]
    fn test_halve_u64() {
        assert_eq!(u64::MAX.halve(), (u32::MAX, u32::MAX));
        assert_eq!(0xDEADDEAD_C0DEC0DEu64.halve(), (0xDEADDEAD, 0xC0DEC0DE));
    }

    #[test]
    fn test_halve_u128() {
        assert_eq!(u128::MAX.halve(), (u64::MAX, u64::MAX));
        assert_eq!((1u128 << 64).halve(), (1, 0));
    }

    #[test]
    fn test_merge_u8() {
        assert_eq!(0xFFu8.merge(0xFF), 0xFFFF);
        assert_eq!(0x00u8.merge(0x01), 0x0001);
    }

    #[test]
    fn test_merge_u16() {
        assert_eq!(0xFFFFu16.merge(0xFFFF), 0xFFFF_FFFF);
    }

    #[test]
    fn test_merge_u32() {
        assert_eq!(0xDEADDEADu32.merge(0xC0DEC0DE), 0xDEADDEAD_C0DEC0DE);
    }

    #[test]
    fn test_merge_u64() {
        assert_eq!(u64::MAX.merge(u64::MAX), u128::MAX);
        assert_eq!(1u64.merge(0), 1u128 << 64);
    }

    #[test]
    fn test_merge_inverts_halve() {
        let (high, low) = 0xCAFEBABEu32.halve();
        assert_eq!(high.merge(low), 0xCAFEBABE);
    }

    #[test]
    fn test_word_constants() {
        assert_eq!(<u8 as Word>::BITS, 8);
        assert_eq!(<u128 as Word>::BITS, 128);
        assert_eq!(<u32 as Word>::ZERO, 0);
    }
}
