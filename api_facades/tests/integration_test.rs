//! Integration tests for api_facades crate
//!
//! These tests drive the layers together through the facade surface.

use api_facades::*;

#[test]
fn test_random_words_survive_byte_round_trip() {
    let mut words = [0u32; 16];
    fill_random_u32(&mut words);

    let bytes = split_u32_to_u8(&words).unwrap();
    assert_eq!(bytes.len(), 64);
    assert_eq!(merge_u8_to_u32(&bytes).unwrap(), words);
}

#[test]
fn test_xor_keystream_over_split_words() {
    let plain = split_u64_to_u8(&[0x0123_4567_89AB_CDEF]).unwrap();
    let mut key = [0u8; 8];
    fill_random_bytes(&mut key);

    let mut cipher = plain.clone();
    xor_into_bytes(&mut cipher, &key).unwrap();
    xor_into_bytes(&mut cipher, &key).unwrap();
    assert!(is_equal_bytes(&cipher, &plain));
}

#[test]
fn test_scaled_random_words_stay_in_range() {
    let mut words = [0u64; 32];
    fill_random_u64(&mut words);

    for word in words {
        let scaled = scale_u64(word, 0, u64::MAX, 1_000, 2_000).unwrap();
        assert!((1_000..=2_000).contains(&scaled));
    }
}

#[test]
fn test_bounded_scaling_agrees_with_native() {
    let native = scale_u128(u128::MAX / 3, 0, u128::MAX, 7, 9_000_000).unwrap();
    let big = scale_unsigned_128(
        &BigNumber::from_u128(u128::MAX / 3),
        &BigNumber::from_u128(0),
        BigWidth::Unsigned128.max(),
        &BigNumber::from_u128(7),
        &BigNumber::from_u128(9_000_000),
    )
    .unwrap();
    assert_eq!(big.to_u128(), Some(native));
}

#[test]
fn test_errors_share_std_error() {
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(merge_u8_to_u64(&[1, 2, 3]).unwrap_err()),
        Box::new(scale_i32(0, 0, 10, 5, 5).unwrap_err()),
    ];
    assert_eq!(errors[0].to_string(), "source length must be a multiple of 8, got 3");
    assert_eq!(errors[1].to_string(), "max_r must be greater than min_r");
}
