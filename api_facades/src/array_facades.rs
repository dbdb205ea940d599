//! Array Facades
//!
//! Named buffer helpers for byte and 32 bit word buffers.

use entities_integers::LengthError;
use infrastructure_utilities::ArrayUtils;

/// Fill a byte buffer from the OS random generator
pub fn fill_random_bytes(buf: &mut [u8]) -> &mut [u8] {
    ArrayUtils::fill_random(buf)
}

/// Fill a 32 bit word buffer from the OS random generator
pub fn fill_random_u32(buf: &mut [u32]) -> &mut [u32] {
    ArrayUtils::fill_random(buf)
}

/// Fill a 64 bit word buffer from the OS random generator
pub fn fill_random_u64(buf: &mut [u64]) -> &mut [u64] {
    ArrayUtils::fill_random(buf)
}

/// Element-wise byte buffer equality
pub fn is_equal_bytes(left: &[u8], right: &[u8]) -> bool {
    ArrayUtils::is_equal(left, right)
}

/// Element-wise 32 bit word buffer equality
pub fn is_equal_u32(left: &[u32], right: &[u32]) -> bool {
    ArrayUtils::is_equal(left, right)
}

/// All bytes zero
pub fn is_empty_bytes(buf: &[u8]) -> bool {
    ArrayUtils::is_empty(buf)
}

/// All 32 bit words zero
pub fn is_empty_u32(buf: &[u32]) -> bool {
    ArrayUtils::is_empty(buf)
}

/// XOR `that` into `this`; `that` must be at least as long
pub fn xor_into_bytes<'a>(this: &'a mut [u8], that: &[u8]) -> Result<&'a mut [u8], LengthError> {
    ArrayUtils::xor_into(this, that)
}

/// XOR `that` into `this`; `that` must be at least as long
pub fn xor_into_u32<'a>(this: &'a mut [u32], that: &[u32]) -> Result<&'a mut [u32], LengthError> {
    ArrayUtils::xor_into(this, that)
}

/// XOR two bytes
pub fn xor_byte(this: u8, that: u8) -> u8 {
    ArrayUtils::xor(this, that)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_random_bytes() {
        let mut buf = [0u8; 1000];
        assert!(!is_empty_bytes(fill_random_bytes(&mut buf)));
    }

    #[test]
    fn test_fill_random_words() {
        let mut words = [0u32; 64];
        assert!(!is_empty_u32(fill_random_u32(&mut words)));
        let mut longs = [0u64; 32];
        assert!(fill_random_u64(&mut longs).iter().any(|w| *w != 0));
    }

    #[test]
    fn test_equality_and_emptiness() {
        assert!(is_equal_bytes(&[1, 2], &[1, 2]));
        assert!(!is_equal_u32(&[1, 2], &[1, 2, 3]));
        assert!(is_empty_bytes(&[0, 0]));
        assert!(!is_empty_u32(&[0, 1]));
    }

    #[test]
    fn test_xor() {
        let mut this = [1u8, 2, 3, 4];
        assert_eq!(xor_into_bytes(&mut this, &[5, 6, 7, 8]).unwrap(), [4, 4, 4, 12]);

        let mut words = [1u32];
        assert!(xor_into_u32(&mut words, &[]).is_err());

        assert_eq!(xor_byte(0x0F, 0x19), 0x16);
    }
}
