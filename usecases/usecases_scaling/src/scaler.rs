//! Min-Max Scaler
//!
//! Maps `src` from `[min_n, max_n]` onto `[min_r, max_r]` preserving its
//! relative position, using integer division (truncating).
//!
//! Preconditions, checked in this order:
//! 1. `min_n <= min_r`
//! 2. `max_n >= max_r`
//! 3. `max_r > min_r`
//! 4. `min_n <= src <= max_n`
//!
//! With these, `min_r <= result <= max_r` always holds.

use entities_utilities::{BigNumber, BigWidth};

/// Scaling errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// `min_n > min_r`
    MinDomainAboveMinRange,
    /// `max_n < max_r`
    MaxDomainBelowMaxRange,
    /// `max_r <= min_r`
    EmptyRange,
    /// `src` outside `[min_n, max_n]`
    SourceOutsideDomain,
    /// An operand does not fit the requested width
    OperandOutsideWidth {
        operand: &'static str,
        width: BigWidth,
    },
    /// The scaled value does not fit the caller's integer type
    Unrepresentable,
}

impl std::fmt::Display for ScaleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleError::MinDomainAboveMinRange => {
                write!(f, "min_n must be less than or equal to min_r")
            }
            ScaleError::MaxDomainBelowMaxRange => {
                write!(f, "max_n must be greater than or equal to max_r")
            }
            ScaleError::EmptyRange => write!(f, "max_r must be greater than min_r"),
            ScaleError::SourceOutsideDomain => {
                write!(f, "src must lie between min_n and max_n")
            }
            ScaleError::OperandOutsideWidth { operand, width } => {
                write!(f, "{} does not fit in a {} integer", operand, width)
            }
            ScaleError::Unrepresentable => {
                write!(f, "scaled value does not fit the target type")
            }
        }
    }
}

impl std::error::Error for ScaleError {}

/// Integers that can be scaled natively, with arbitrary precision fallback
pub trait Scalable: Copy + Ord + std::fmt::Debug {
    /// The formula in this type's own width; `None` on overflow
    fn scale_native(src: Self, min_n: Self, max_n: Self, min_r: Self, max_r: Self) -> Option<Self>;

    /// The formula in a wider native type; `None` if there is none or it
    /// overflows as well
    fn scale_widened(src: Self, min_n: Self, max_n: Self, min_r: Self, max_r: Self) -> Option<Self>;

    /// Convert to a big number
    fn to_big(self) -> BigNumber;

    /// Convert from a big number; `None` if out of range
    fn from_big(value: &BigNumber) -> Option<Self>;
}

macro_rules! checked_formula {
    ($src:expr, $min_n:expr, $max_n:expr, $min_r:expr, $max_r:expr) => {{
        let offset = $src.checked_sub($min_n)?;
        let span_r = $max_r.checked_sub($min_r)?;
        let span_n = $max_n.checked_sub($min_n)?;
        $min_r.checked_add(offset.checked_mul(span_r)?.checked_div(span_n)?)
    }};
}

macro_rules! impl_scalable {
    ($to_big_native:ident; $($t:ty => $wide:ty),+) => {
        $(
            impl Scalable for $t {
                fn scale_native(src: $t, min_n: $t, max_n: $t, min_r: $t, max_r: $t) -> Option<$t> {
                    checked_formula!(src, min_n, max_n, min_r, max_r)
                }

                fn scale_widened(src: $t, min_n: $t, max_n: $t, min_r: $t, max_r: $t) -> Option<$t> {
                    let scaled: $wide = checked_formula!(
                        src as $wide,
                        min_n as $wide,
                        max_n as $wide,
                        min_r as $wide,
                        max_r as $wide
                    )?;
                    <$t>::try_from(scaled).ok()
                }

                fn to_big(self) -> BigNumber {
                    BigNumber::from(self)
                }

                fn from_big(value: &BigNumber) -> Option<$t> {
                    value.$to_big_native().and_then(|v| <$t>::try_from(v).ok())
                }
            }
        )+
    };
}

macro_rules! impl_scalable_widest {
    ($to_big_native:ident; $($t:ty),+) => {
        $(
            impl Scalable for $t {
                fn scale_native(src: $t, min_n: $t, max_n: $t, min_r: $t, max_r: $t) -> Option<$t> {
                    checked_formula!(src, min_n, max_n, min_r, max_r)
                }

                fn scale_widened(_: $t, _: $t, _: $t, _: $t, _: $t) -> Option<$t> {
                    None
                }

                fn to_big(self) -> BigNumber {
                    BigNumber::from(self)
                }

                fn from_big(value: &BigNumber) -> Option<$t> {
                    value.$to_big_native()
                }
            }
        )+
    };
}

impl_scalable!(to_u128; u8 => u128, u16 => u128, u32 => u128, u64 => u128);
impl_scalable!(to_i128; i8 => i128, i16 => i128, i32 => i128, i64 => i128);
impl_scalable_widest!(to_u128; u128);
impl_scalable_widest!(to_i128; i128);

fn validate<T: Ord>(src: &T, min_n: &T, max_n: &T, min_r: &T, max_r: &T) -> Result<(), ScaleError> {
    if min_n > min_r {
        return Err(ScaleError::MinDomainAboveMinRange);
    }
    if max_n < max_r {
        return Err(ScaleError::MaxDomainBelowMaxRange);
    }
    if max_r <= min_r {
        return Err(ScaleError::EmptyRange);
    }
    if src < min_n || src > max_n {
        return Err(ScaleError::SourceOutsideDomain);
    }
    Ok(())
}

fn big_formula(
    src: &BigNumber,
    min_n: &BigNumber,
    max_n: &BigNumber,
    min_r: &BigNumber,
    max_r: &BigNumber,
) -> Result<BigNumber, ScaleError> {
    let product = src.minus(min_n).times(&max_r.minus(min_r));
    // max_n > min_n once validated
    let quotient = product
        .div(&max_n.minus(min_n))
        .ok_or(ScaleError::EmptyRange)?;
    Ok(min_r.plus(&quotient))
}

/// Scale a native integer from `[min_n, max_n]` onto `[min_r, max_r]`
///
/// Tries the formula in `T` first. If an intermediate value overflows, the
/// formula is redone in the 128 bit type of the same signedness (for
/// narrower types), then with arbitrary precision. Only actual overflow
/// triggers escalation.
///
/// # Arguments
/// * `src` - Value to scale
/// * `min_n`, `max_n` - Domain bounds
/// * `min_r`, `max_r` - Range bounds, inside the domain
///
/// # Returns
/// * `Ok(scaled)` - `min_r <= scaled <= max_r`; `src` itself if already in range
/// * `Err(ScaleError)` - A precondition was violated
///
/// # Examples
/// ```
/// use usecases_scaling::scale;
///
/// assert_eq!(scale(u64::MAX, 0, u64::MAX, 10, 20), Ok(20));
/// assert_eq!(scale(50u64, 0, 100, 10, 20), Ok(15));
/// assert_eq!(scale(12u64, 0, 100, 10, 20), Ok(12));
/// ```
pub fn scale<T: Scalable>(src: T, min_n: T, max_n: T, min_r: T, max_r: T) -> Result<T, ScaleError> {
    validate(&src, &min_n, &max_n, &min_r, &max_r)?;

    if src >= min_r && src <= max_r {
        return Ok(src);
    }

    if let Some(scaled) = T::scale_native(src, min_n, max_n, min_r, max_r) {
        return Ok(scaled);
    }

    let width = std::any::type_name::<T>();
    if let Some(scaled) = T::scale_widened(src, min_n, max_n, min_r, max_r) {
        tracing::trace!(width = width, "native scaling overflowed, used 128 bit arithmetic");
        return Ok(scaled);
    }

    tracing::trace!(width = width, "native scaling overflowed, using arbitrary precision");
    let scaled = big_formula(
        &src.to_big(),
        &min_n.to_big(),
        &max_n.to_big(),
        &min_r.to_big(),
        &max_r.to_big(),
    )?;
    T::from_big(&scaled).ok_or(ScaleError::Unrepresentable)
}

/// Scale with arbitrary precision
///
/// Same contract as [`scale`] with no overflow possible. This is the
/// reference the native paths must agree with.
///
/// `src` outside `[min_n, max_n]` is rejected with
/// [`ScaleError::SourceOutsideDomain`] rather than extrapolated, so the
/// result always lies in `[min_r, max_r]`.
pub fn scale_big(
    src: &BigNumber,
    min_n: &BigNumber,
    max_n: &BigNumber,
    min_r: &BigNumber,
    max_r: &BigNumber,
) -> Result<BigNumber, ScaleError> {
    validate(src, min_n, max_n, min_r, max_r)?;

    if src >= min_r && src <= max_r {
        return Ok(src.clone());
    }

    big_formula(src, min_n, max_n, min_r, max_r)
}

/// Scale with arbitrary precision, requiring every operand to fit `width`
///
/// # Examples
/// ```
/// use entities_utilities::{BigNumber, BigWidth};
/// use usecases_scaling::scale_bounded;
///
/// let width = BigWidth::Unsigned256;
/// let scaled = scale_bounded(
///     width,
///     width.max(),
///     width.min(),
///     width.max(),
///     &BigNumber::from_u64(10),
///     &BigNumber::from_u64(20),
/// );
/// assert_eq!(scaled, Ok(BigNumber::from_u64(20)));
/// ```
pub fn scale_bounded(
    width: BigWidth,
    src: &BigNumber,
    min_n: &BigNumber,
    max_n: &BigNumber,
    min_r: &BigNumber,
    max_r: &BigNumber,
) -> Result<BigNumber, ScaleError> {
    let operands = [
        ("src", src),
        ("min_n", min_n),
        ("max_n", max_n),
        ("min_r", min_r),
        ("max_r", max_r),
    ];
    if let Some(&(operand, _)) = operands.iter().find(|(_, value)| !width.contains(value)) {
        return Err(ScaleError::OperandOutsideWidth { operand, width });
    }

    scale_big(src, min_n, max_n, min_r, max_r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned_64_full_domain() {
        let scaled = scale(u64::MAX, u64::MIN, u64::MAX, 10, 20).unwrap();
        assert_eq!(scaled, 20);
    }

    #[test]
    fn test_signed_64_within_32_bit_domain() {
        let scaled = scale(-1_000_000i64, i32::MIN as i64, i32::MAX as i64, -20, 10).unwrap();
        assert_eq!(scaled, -6);
    }

    #[test]
    fn test_signed_64_full_domain_escalates() {
        assert_eq!(scale(i64::MAX, i64::MIN, i64::MAX, -20, 10), Ok(10));
        assert_eq!(scale(i64::MIN, i64::MIN, i64::MAX, -20, 10), Ok(-20));
    }

    #[test]
    fn test_unsigned_128_full_domain() {
        assert_eq!(scale(u128::MAX, u128::MIN, u128::MAX, 10, 20), Ok(20));
    }

    #[test]
    fn test_signed_128_full_domain() {
        assert_eq!(scale(i128::MAX, i128::MIN, i128::MAX, -10, 20), Ok(20));
        assert_eq!(scale(i128::MAX, i128::MIN, i128::MAX, -20, 10), Ok(10));
        assert_eq!(scale(i128::MIN, i128::MIN, i128::MAX, -20, 10), Ok(-20));
    }

    #[test]
    fn test_narrow_type_widens() {
        // 200 * 10 overflows u8
        assert_eq!(scale(200u8, 0, 255, 10, 20), Ok(17));
    }

    #[test]
    fn test_native_path() {
        assert_eq!(scale(50u64, 0, 100, 10, 20), Ok(15));
        assert_eq!(scale(-100i128, -100, 100, -10, 10), Ok(-10));
    }

    #[test]
    fn test_identity_inside_range() {
        assert_eq!(scale(15u64, 0, 100, 10, 20), Ok(15));
        assert_eq!(scale(10i64, i64::MIN, i64::MAX, 10, 20), Ok(10));
        assert_eq!(scale(20i64, i64::MIN, i64::MAX, 10, 20), Ok(20));
    }

    #[test]
    fn test_precondition_errors() {
        assert_eq!(scale(0i64, 5, 100, 0, 10), Err(ScaleError::MinDomainAboveMinRange));
        assert_eq!(scale(0i64, 0, 10, 0, 20), Err(ScaleError::MaxDomainBelowMaxRange));
        assert_eq!(scale(0i64, 0, 100, 10, 10), Err(ScaleError::EmptyRange));
        assert_eq!(scale(0i64, 0, 100, 20, 10), Err(ScaleError::EmptyRange));
        assert_eq!(scale(200u64, 0, 100, 10, 20), Err(ScaleError::SourceOutsideDomain));
    }

    #[test]
    fn test_error_messages_name_relation() {
        assert_eq!(
            ScaleError::MinDomainAboveMinRange.to_string(),
            "min_n must be less than or equal to min_r"
        );
        assert_eq!(ScaleError::EmptyRange.to_string(), "max_r must be greater than min_r");
    }

    #[test]
    fn test_scale_big_signed_512() {
        let width = BigWidth::Signed512;
        let scaled = scale_big(
            width.max(),
            width.min(),
            width.max(),
            &BigNumber::from_i64(-20),
            &BigNumber::from_i64(10),
        )
        .unwrap();
        assert_eq!(scaled, BigNumber::from_i64(10));
    }

    #[test]
    fn test_scale_big_rejects_source_outside_domain() {
        let err = scale_big(
            &BigNumber::from_u64(150),
            &BigNumber::from_u64(0),
            &BigNumber::from_u64(100),
            &BigNumber::from_u64(10),
            &BigNumber::from_u64(20),
        )
        .unwrap_err();
        assert_eq!(err, ScaleError::SourceOutsideDomain);
    }

    #[test]
    fn test_scale_bounded_rejects_operand() {
        let too_big = BigNumber::power_of_two(128);
        let err = scale_bounded(
            BigWidth::Unsigned128,
            &too_big,
            &BigNumber::from_u64(0),
            &too_big,
            &BigNumber::from_u64(10),
            &BigNumber::from_u64(20),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ScaleError::OperandOutsideWidth { operand: "src", width: BigWidth::Unsigned128 }
        );
    }
}
