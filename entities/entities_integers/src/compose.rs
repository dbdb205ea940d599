//! Width Ratios
//!
//! [`Compose<N>`] relates a wide word `W` to a narrow word `N` whose width
//! divides it. `W::RATIO` narrow words make up one wide word, most
//! significant first. The wide value is built by recursive halving: a `u64`
//! from bytes is the merge of two `u32`s, each the merge of two `u16`s, each
//! the merge of two bytes.

use crate::word::{Halve, Merge, Word};

/// A wide word made of `RATIO` narrow words of type `N`
pub trait Compose<N: Word>: Word {
    /// Number of `N` words in one `Self`
    const RATIO: usize;

    /// Build a wide word from exactly `RATIO` narrow words, high first
    ///
    /// `parts.len()` must equal `RATIO`; callers validate lengths before
    /// composing.
    ///
    /// # Panics
    /// If `parts.len()` is less than `RATIO`.
    fn compose(parts: &[N]) -> Self;

    /// Write this word into exactly `RATIO` narrow words, high first
    ///
    /// `parts.len()` must equal `RATIO`.
    ///
    /// # Panics
    /// If `parts.len()` is less than `RATIO`.
    fn decompose(self, parts: &mut [N]);
}

macro_rules! impl_compose_identity {
    ($($t:ty),+) => {
        $(
            impl Compose<$t> for $t {
                const RATIO: usize = 1;

                #[inline]
                fn compose(parts: &[$t]) -> Self {
                    parts[0]
                }

                #[inline]
                fn decompose(self, parts: &mut [$t]) {
                    parts[0] = self;
                }
            }
        )+
    };
}

macro_rules! impl_compose {
    ($wide:ty => $half:ty : $($narrow:ty),+) => {
        $(
            impl Compose<$narrow> for $wide {
                const RATIO: usize = 2 * <$half as Compose<$narrow>>::RATIO;

                #[inline]
                fn compose(parts: &[$narrow]) -> Self {
                    let (high, low) = parts.split_at(<Self as Compose<$narrow>>::RATIO / 2);
                    let high = <$half as Compose<$narrow>>::compose(high);
                    let low = <$half as Compose<$narrow>>::compose(low);
                    high.merge(low)
                }

                #[inline]
                fn decompose(self, parts: &mut [$narrow]) {
                    let (high, low) = self.halve();
                    let (high_parts, low_parts) = parts.split_at_mut(<Self as Compose<$narrow>>::RATIO / 2);
                    <$half as Compose<$narrow>>::decompose(high, high_parts);
                    <$half as Compose<$narrow>>::decompose(low, low_parts);
                }
            }
        )+
    };
}

impl_compose_identity!(u8, u16, u32, u64, u128);
impl_compose!(u16 => u8: u8);
impl_compose!(u32 => u16: u16, u8);
impl_compose!(u64 => u32: u32, u16, u8);
impl_compose!(u128 => u64: u64, u32, u16, u8);
