//! Array Utilities
//!
//! Provides utility functions for working with buffers of fixed-width
//! unsigned integers. All functions are stateless; the ones that mutate do
//! so in place and hand the buffer back for chaining.

use entities_integers::{LengthError, Word};
use rand::rngs::OsRng;
use rand::{CryptoRng, Fill, Rng, RngCore};

/// Array and buffer utility functions
pub struct ArrayUtils;

impl ArrayUtils {
    /// Overwrite every element with random bits from the operating system
    ///
    /// A fresh handle to the OS generator is taken on every call; nothing
    /// is cached between calls.
    ///
    /// # Arguments
    /// * `buf` - Buffer to fill
    ///
    /// # Returns
    /// The same buffer
    ///
    /// # Panics
    /// If the operating system entropy source fails.
    pub fn fill_random<T>(buf: &mut [T]) -> &mut [T]
    where
        [T]: Fill,
    {
        Self::fill_random_with(&mut OsRng, buf)
    }

    /// Overwrite every element with random bits from `rng`
    ///
    /// # Arguments
    /// * `rng` - Cryptographically secure generator owned by the caller
    /// * `buf` - Buffer to fill
    ///
    /// # Returns
    /// The same buffer
    pub fn fill_random_with<'a, R, T>(rng: &mut R, buf: &'a mut [T]) -> &'a mut [T]
    where
        R: RngCore + CryptoRng,
        [T]: Fill,
    {
        rng.fill(&mut *buf);
        buf
    }

    /// Compare two buffers element by element
    ///
    /// The same buffer (same address and length) is always equal to itself
    /// without being scanned.
    ///
    /// # Arguments
    /// * `left` - First buffer
    /// * `right` - Second buffer
    ///
    /// # Returns
    /// `true` if both have the same length and the same elements
    pub fn is_equal<T: Word>(left: &[T], right: &[T]) -> bool {
        if left.as_ptr() == right.as_ptr() && left.len() == right.len() {
            return true;
        }
        if left.len() != right.len() {
            return false;
        }
        left.iter().zip(right).all(|(a, b)| a == b)
    }

    /// Check that every element is zero
    ///
    /// # Arguments
    /// * `buf` - Buffer to inspect
    ///
    /// # Returns
    /// `true` if no element has a bit set (including the empty buffer)
    pub fn is_empty<T: Word>(buf: &[T]) -> bool {
        buf.iter().all(|item| *item == T::ZERO)
    }

    /// XOR `that` into `this` element by element
    ///
    /// # Arguments
    /// * `this` - Left operand, overwritten with the result
    /// * `that` - Right operand; must be at least as long as `this`
    ///
    /// # Returns
    /// * `Ok(this)` - The updated left operand
    /// * `Err(LengthError::TooShort)` - `that` is shorter than `this`; nothing written
    ///
    /// # Examples
    /// ```
    /// use infrastructure_utilities::ArrayUtils;
    ///
    /// let mut this = [1u8, 2, 3, 4];
    /// ArrayUtils::xor_into(&mut this, &[5, 6, 7, 8]).unwrap();
    /// assert_eq!(this, [4, 4, 4, 12]);
    /// ```
    pub fn xor_into<'a, T: Word>(
        this: &'a mut [T],
        that: &[T],
    ) -> Result<&'a mut [T], LengthError> {
        if that.len() < this.len() {
            return Err(LengthError::TooShort {
                param: "that",
                min: this.len(),
                actual: that.len(),
            });
        }

        for (a, b) in this.iter_mut().zip(that) {
            *a = *a ^ *b;
        }
        Ok(this)
    }

    /// XOR two single words
    pub fn xor<T: Word>(this: T, that: T) -> T {
        this ^ that
    }
}
