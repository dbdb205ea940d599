//! Big Number Operations
//!
//! Provides arbitrary precision integer operations.
//!
//! This module uses the `malachite` crate for arbitrary-precision
//! arithmetic. Nothing here can overflow; conversions back to native
//! integers return `None` when the value does not fit.

use malachite::Integer;

/// Big number representation using malachite's Integer
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigNumber {
    value: Integer,
}

impl BigNumber {
    /// Create a new big number from i64
    pub fn from_i64(value: i64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u64
    pub fn from_u64(value: u64) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from i128
    pub fn from_i128(value: i128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Create a new big number from u128
    pub fn from_u128(value: u128) -> Self {
        Self {
            value: Integer::from(value),
        }
    }

    /// Two raised to `exponent`
    pub fn power_of_two(exponent: u64) -> Self {
        Self {
            value: Integer::from(1u32) << exponent,
        }
    }

    /// Convert to i64
    ///
    /// Returns None if the value is out of range
    pub fn to_i64(&self) -> Option<i64> {
        i64::try_from(&self.value).ok()
    }

    /// Convert to u64
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u64(&self) -> Option<u64> {
        u64::try_from(&self.value).ok()
    }

    /// Convert to i128
    ///
    /// Returns None if the value is out of range
    pub fn to_i128(&self) -> Option<i128> {
        i128::try_from(&self.value).ok()
    }

    /// Convert to u128
    ///
    /// Returns None if the value is negative or too large
    pub fn to_u128(&self) -> Option<u128> {
        u128::try_from(&self.value).ok()
    }

    /// Check if the number is negative
    pub fn is_negative(&self) -> bool {
        self.value < 0
    }

    /// Check if the number is zero
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Add two big numbers: x + y
    pub fn plus(&self, other: &Self) -> Self {
        Self {
            value: &self.value + &other.value,
        }
    }

    /// Subtract two big numbers: x - y
    pub fn minus(&self, other: &Self) -> Self {
        Self {
            value: &self.value - &other.value,
        }
    }

    /// Multiply two big numbers: x * y
    pub fn times(&self, other: &Self) -> Self {
        Self {
            value: &self.value * &other.value,
        }
    }

    /// Divide two big numbers: x / y, truncating toward zero
    ///
    /// Returns None if dividing by zero
    pub fn div(&self, other: &Self) -> Option<Self> {
        if other.is_zero() {
            return None;
        }
        Some(Self {
            value: &self.value / &other.value,
        })
    }

    /// Get the internal Integer value (for advanced use)
    pub fn as_integer(&self) -> &Integer {
        &self.value
    }

    /// Create from Integer (for advanced use)
    pub fn from_integer(value: Integer) -> Self {
        Self { value }
    }
}

impl std::fmt::Display for BigNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

macro_rules! impl_from_native {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigNumber {
                fn from(value: $t) -> Self {
                    Self {
                        value: Integer::from(value),
                    }
                }
            }
        )+
    };
}

impl_from_native!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
