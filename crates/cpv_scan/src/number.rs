//! Numeric capabilities the reader and writer dispatch on.
//!
//! The traits are sealed: the grammar and overflow checks are written once,
//! generically, and instantiated for the primitive types below.
//!
//! Integer parsing never relies on checked arithmetic. Before accumulating
//! a digit `d` into `n`, the reader tests `n > (MAX - d) / 10`, which cannot
//! itself overflow. Signed values are parsed as a same-width unsigned
//! magnitude and negated with `0 - magnitude` in the unsigned type, so the
//! minimum value stays reachable.

use std::fmt::{Debug, Display};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use cpv_diagnostic::Result;

use crate::Reader;

mod sealed {
    pub trait Sealed {}
}

/// A primitive integer type the reader can parse and bound-check.
pub trait Integer: sealed::Sealed + Copy + Ord + Display + Debug {
    const MIN: Self;
    const MAX: Self;

    /// Parse one literal at the cursor with no skipping.
    #[doc(hidden)]
    fn read_strict(reader: &mut Reader<'_>) -> Result<Self>;
}

/// An unsigned integer type: the accumulator of every integer parse.
pub trait Unsigned:
    Integer + Add<Output = Self> + Sub<Output = Self> + Mul<Output = Self> + Div<Output = Self>
{
    const ZERO: Self;
    const TEN: Self;

    fn from_digit(digit: u8) -> Self;
}

/// A signed integer type, parsed through its unsigned magnitude.
pub trait Signed: Integer {
    type Magnitude: Unsigned;

    /// `|MIN|`, computed as `0 - MIN` in the unsigned type.
    fn min_magnitude() -> Self::Magnitude;

    /// `MAX` as an unsigned magnitude.
    fn max_magnitude() -> Self::Magnitude;

    /// Rebuild a value from a magnitude already checked against the
    /// matching bound.
    fn from_magnitude(magnitude: Self::Magnitude, negative: bool) -> Self;
}

/// A primitive floating-point type.
pub trait Float: sealed::Sealed + Copy + PartialOrd + Display + Debug + FromStr {}

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const MIN: Self = <$t>::MIN;
            const MAX: Self = <$t>::MAX;

            #[inline]
            fn read_strict(reader: &mut Reader<'_>) -> Result<Self> {
                reader.read_unsigned_strict::<$t>()
            }
        }

        impl Unsigned for $t {
            const ZERO: Self = 0;
            const TEN: Self = 10;

            #[inline]
            fn from_digit(digit: u8) -> Self {
                Self::from(digit)
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($s:ty => $u:ty),* $(,)?) => {$(
        impl sealed::Sealed for $s {}

        impl Integer for $s {
            const MIN: Self = <$s>::MIN;
            const MAX: Self = <$s>::MAX;

            #[inline]
            fn read_strict(reader: &mut Reader<'_>) -> Result<Self> {
                reader.read_signed_strict::<$s>()
            }
        }

        impl Signed for $s {
            type Magnitude = $u;

            #[inline]
            #[allow(clippy::cast_sign_loss, reason = "two's complement reinterpretation")]
            fn min_magnitude() -> $u {
                (0 as $u).wrapping_sub(<$s>::MIN as $u)
            }

            #[inline]
            #[allow(clippy::cast_sign_loss, reason = "MAX is non-negative")]
            fn max_magnitude() -> $u {
                <$s>::MAX as $u
            }

            #[inline]
            #[allow(clippy::cast_possible_wrap, reason = "two's complement reinterpretation")]
            fn from_magnitude(magnitude: $u, negative: bool) -> $s {
                if negative {
                    (0 as $u).wrapping_sub(magnitude) as $s
                } else {
                    magnitude as $s
                }
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, i128 => u128, isize => usize);

impl sealed::Sealed for f32 {}
impl sealed::Sealed for f64 {}
impl Float for f32 {}
impl Float for f64 {}
