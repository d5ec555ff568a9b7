/*
 *   Copyright (c) 2025 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! # Narrowing conversions
//!
//! - [narrow_cast] is an `as` cast with a name that is easy to search for. It never
//!   fails, and it may lose information (truncation, wrap around, saturation).
//! - [narrow] does the same cast, then casts the result back to the source type. If that
//!   round trip doesn't reproduce the original value, it returns [PppError::Narrowing].
//!
//! Both work for every pair of primitive numeric types, via the [NarrowCast] trait.
//!
//! Note that the check is only the round trip. A value that wraps and then wraps back
//! (eg, `-1_i32` into `u32` and back) passes, and `NaN` never passes since it is not
//! equal to itself.
//!
//! ```
//! use r3bl_ppp::{narrow, narrow_cast, PppError};
//!
//! assert_eq!(narrow_cast::<i32, _>(3.9_f64), 3);
//! assert_eq!(narrow::<i32, _>(3.9_f64), Err(PppError::Narrowing));
//!
//! assert_eq!(narrow::<u8, _>(255_i32), Ok(255));
//! assert_eq!(narrow::<u8, _>(300_i32), Err(PppError::Narrowing));
//! ```

use crate::{PppError, PppResult};

/// A plain `as` conversion from `Self` into `T`.
pub trait NarrowCast<T>: Copy {
    fn narrow_cast(self) -> T;
}

/// Implement [NarrowCast] from one type into each of a list of types.
macro_rules! impl_narrow_cast_from {
    ($from:ty => $($to:ty),+) => {
        $(
            #[allow(
                trivial_numeric_casts,
                clippy::cast_lossless,
                clippy::cast_possible_truncation,
                clippy::cast_possible_wrap,
                clippy::cast_precision_loss,
                clippy::cast_sign_loss,
                clippy::unnecessary_cast
            )]
            impl NarrowCast<$to> for $from {
                #[inline]
                fn narrow_cast(self) -> $to { self as $to }
            }
        )+
    };
}

/// Implement [NarrowCast] for every pair in the list of primitive numeric types.
macro_rules! impl_narrow_cast_all {
    ($($from:ty),+) => {
        $(
            impl_narrow_cast_from!(
                $from => i8, i16, i32, i64, i128, isize,
                         u8, u16, u32, u64, u128, usize,
                         f32, f64
            );
        )+
    };
}

impl_narrow_cast_all!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

/// Unchecked conversion of `value` into `T`. This is exactly `value as T`.
///
/// ```
/// use r3bl_ppp::narrow_cast;
///
/// let small: u8 = narrow_cast(300_i32);
/// assert_eq!(small, 44);
/// ```
#[must_use]
pub fn narrow_cast<T, U>(value: U) -> T
where
    U: NarrowCast<T>,
{
    value.narrow_cast()
}

/// Checked conversion of `value` into `T`.
///
/// # Errors
///
/// [PppError::Narrowing] if converting the result back into `U` doesn't give `value`.
pub fn narrow<T, U>(value: U) -> PppResult<T>
where
    U: NarrowCast<T> + PartialEq,
    T: NarrowCast<U>,
{
    let narrowed: T = value.narrow_cast();
    let round_trip: U = narrowed.narrow_cast();
    if round_trip == value {
        Ok(narrowed)
    } else {
        Err(PppError::Narrowing)
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_narrow_cast_is_unchecked() {
        assert_eq2!(narrow_cast::<i32, _>(3.9_f64), 3);
        assert_eq2!(narrow_cast::<i32, _>(-3.9_f64), -3);
        assert_eq2!(narrow_cast::<u8, _>(300_i32), 44);
        assert_eq2!(narrow_cast::<i8, _>(200_u8), -56);
        assert_eq2!(narrow_cast::<u8, _>(-1_i32), 255);
        // Float to int saturates.
        assert_eq2!(narrow_cast::<u8, _>(1e10_f64), u8::MAX);
        assert_eq2!(narrow_cast::<i32, _>(f64::NAN), 0);
    }

    #[test]
    fn test_narrow_float_to_int() {
        assert_eq2!(narrow::<i32, _>(3.9_f64), Err(PppError::Narrowing));
        assert_eq2!(narrow::<i32, _>(3.0_f64), Ok(3));
        assert_eq2!(narrow::<i64, _>(-2.0_f32), Ok(-2));
        assert_eq2!(narrow::<i32, _>(f64::NAN), Err(PppError::Narrowing));
        assert_eq2!(narrow::<i32, _>(1e20_f64), Err(PppError::Narrowing));
    }

    #[test_case(0, Ok(0))]
    #[test_case(127, Ok(127))]
    #[test_case(255, Ok(255))]
    #[test_case(256, Err(PppError::Narrowing))]
    #[test_case(300, Err(PppError::Narrowing))]
    #[test_case(-1, Err(PppError::Narrowing))]
    fn test_narrow_i32_to_u8(value: i32, expected: PppResult<u8>) {
        assert_eq2!(narrow::<u8, _>(value), expected);
    }

    #[test]
    fn test_narrow_counterexample_per_pair() {
        assert_eq2!(narrow::<i8, _>(128_i16), Err(PppError::Narrowing));
        assert_eq2!(narrow::<i16, _>(40_000_i32), Err(PppError::Narrowing));
        assert_eq2!(narrow::<i32, _>(i64::MAX), Err(PppError::Narrowing));
        assert_eq2!(narrow::<u16, _>(70_000_u32), Err(PppError::Narrowing));
        assert_eq2!(narrow::<u32, _>(u64::MAX), Err(PppError::Narrowing));
        assert_eq2!(narrow::<usize, _>(u128::MAX), Err(PppError::Narrowing));
        assert_eq2!(narrow::<f32, _>(0.1_f64), Err(PppError::Narrowing));
        assert_eq2!(narrow::<f32, _>(16_777_217_i32), Err(PppError::Narrowing));
    }

    #[test]
    fn test_narrow_exactly_representable_values_pass() {
        assert_eq2!(narrow::<i8, _>(-128_i64), Ok(-128_i8));
        assert_eq2!(narrow::<u16, _>(65_535_u64), Ok(u16::MAX));
        assert_eq2!(narrow::<f32, _>(0.5_f64), Ok(0.5_f32));
        assert_eq2!(narrow::<f32, _>(16_777_216_i32), Ok(16_777_216.0_f32));
        assert_eq2!(narrow::<u8, _>(u32::from(b'a')), Ok(b'a'));
    }

    #[test]
    fn test_narrow_only_checks_round_trip() {
        // Wraps to u32::MAX and wraps back to -1.
        assert_eq2!(narrow::<u32, _>(-1_i32), Ok(u32::MAX));
        // Same type is always exact.
        assert_eq2!(narrow::<i32, _>(i32::MIN), Ok(i32::MIN));
    }
}
