// Copyright @yucwang 2026

use crate::math::constants::Float;

use std::fmt;
use std::hash::Hash;
use std::ops::{BitAnd, BitOr, BitXor};

/// Fixed-width unsigned integer a shift register can be built on.
///
/// All arithmetic wraps at `BITS`. Shifts by `BITS` or more clear the word
/// instead of masking the shift amount, so a narrow word behaves as if it
/// were widened, shifted and truncated back.
pub trait RegisterWord:
    Copy
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    fn shift_left(self, n: u32) -> Self;
    fn shift_right(self, n: u32) -> Self;
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;

    fn to_float(self) -> Float;

    /// Truncates toward zero and saturates at the word bounds.
    fn from_float(value: Float) -> Self;

    /// Keeps the low `BITS` bits of `value`.
    fn from_u128(value: u128) -> Self;
}

macro_rules! impl_register_word {
    ($($t:ty),*) => {
        $(
            impl RegisterWord for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$t>::MAX;

                #[inline]
                fn shift_left(self, n: u32) -> Self {
                    self.checked_shl(n).unwrap_or(0)
                }

                #[inline]
                fn shift_right(self, n: u32) -> Self {
                    self.checked_shr(n).unwrap_or(0)
                }

                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$t>::wrapping_add(self, rhs)
                }

                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$t>::wrapping_sub(self, rhs)
                }

                #[inline]
                fn to_float(self) -> Float {
                    self as Float
                }

                #[inline]
                fn from_float(value: Float) -> Self {
                    value as $t
                }

                #[inline]
                fn from_u128(value: u128) -> Self {
                    value as $t
                }
            }
        )*
    };
}

impl_register_word!(u8, u16, u32, u64, u128, usize);
