//! Wide Integer Bounds
//!
//! Minimum and maximum values of 128, 256 and 512 bit signed and unsigned
//! integers, as [`BigNumber`]s. They are computed once per process on first
//! use and shared afterwards.

use crate::big::BigNumber;

lazy_static::lazy_static! {
    static ref ZERO: BigNumber = BigNumber::from_u64(0);

    static ref UNSIGNED_128_MAX: BigNumber = unsigned_max(128);
    static ref SIGNED_128_MIN: BigNumber = signed_min(128);
    static ref SIGNED_128_MAX: BigNumber = signed_max(128);

    static ref UNSIGNED_256_MAX: BigNumber = unsigned_max(256);
    static ref SIGNED_256_MIN: BigNumber = signed_min(256);
    static ref SIGNED_256_MAX: BigNumber = signed_max(256);

    static ref UNSIGNED_512_MAX: BigNumber = unsigned_max(512);
    static ref SIGNED_512_MIN: BigNumber = signed_min(512);
    static ref SIGNED_512_MAX: BigNumber = signed_max(512);
}

fn unsigned_max(bits: u64) -> BigNumber {
    BigNumber::power_of_two(bits).minus(&BigNumber::from_u64(1))
}

fn signed_min(bits: u64) -> BigNumber {
    BigNumber::from_u64(0).minus(&BigNumber::power_of_two(bits - 1))
}

fn signed_max(bits: u64) -> BigNumber {
    BigNumber::power_of_two(bits - 1).minus(&BigNumber::from_u64(1))
}

/// Integer widths beyond the native 64 bit types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BigWidth {
    Unsigned128,
    Signed128,
    Unsigned256,
    Signed256,
    Unsigned512,
    Signed512,
}

impl BigWidth {
    /// Width in bits
    pub fn bits(self) -> u32 {
        match self {
            BigWidth::Unsigned128 | BigWidth::Signed128 => 128,
            BigWidth::Unsigned256 | BigWidth::Signed256 => 256,
            BigWidth::Unsigned512 | BigWidth::Signed512 => 512,
        }
    }

    /// Whether the width holds negative values
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            BigWidth::Signed128 | BigWidth::Signed256 | BigWidth::Signed512
        )
    }

    /// Smallest representable value
    ///
    /// # Examples
    /// ```
    /// use entities_utilities::{BigNumber, BigWidth};
    ///
    /// assert_eq!(*BigWidth::Signed128.min(), BigNumber::from_i128(i128::MIN));
    /// ```
    pub fn min(self) -> &'static BigNumber {
        match self {
            BigWidth::Unsigned128 | BigWidth::Unsigned256 | BigWidth::Unsigned512 => &*ZERO,
            BigWidth::Signed128 => &*SIGNED_128_MIN,
            BigWidth::Signed256 => &*SIGNED_256_MIN,
            BigWidth::Signed512 => &*SIGNED_512_MIN,
        }
    }

    /// Largest representable value
    pub fn max(self) -> &'static BigNumber {
        match self {
            BigWidth::Unsigned128 => &*UNSIGNED_128_MAX,
            BigWidth::Signed128 => &*SIGNED_128_MAX,
            BigWidth::Unsigned256 => &*UNSIGNED_256_MAX,
            BigWidth::Signed256 => &*SIGNED_256_MAX,
            BigWidth::Unsigned512 => &*UNSIGNED_512_MAX,
            BigWidth::Signed512 => &*SIGNED_512_MAX,
        }
    }

    /// Check whether `value` lies within `min()..=max()`
    pub fn contains(self, value: &BigNumber) -> bool {
        value >= self.min() && value <= self.max()
    }
}

impl std::fmt::Display for BigWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_signed() { "signed" } else { "unsigned" };
        write!(f, "{} {} bit", sign, self.bits())
    }
}
