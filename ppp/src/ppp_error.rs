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

//! Every error that this crate can produce is a variant of [PppError]. It derives
//! [thiserror::Error] and [miette::Diagnostic], so it works with `?` in functions that
//! return [PppResult], and it also converts into a [miette::Report] in functions that
//! return [miette::Result].
//!
//! "Raising" an error in Rust means returning an [Err]. The helpers in this module
//! ([error], [error_with_str], [error_with_int]) build the [Err] for you, so a call site
//! reads like `return error("bad input");`. Nothing in this crate catches or retries any
//! of these errors; they propagate to whatever boundary your program sets up.
//!
//! For more information on error types, see:
//! 1. [Article](https://developerlife.com/2024/06/10/rust-miette-error-handling/)
//! 2. [Video](https://youtu.be/TmLF7vI8lKk)

use std::fmt::Display;

/// Type alias to make it easy to work with [PppError].
///
/// Since [PppError] implements [miette::Diagnostic], a `PppResult<T>` can be lifted with
/// `?` into a [miette::Result] in your own code.
pub type PppResult<T> = Result<T, PppError>;

/// Exit status used by [simple_error].
pub const SIMPLE_ERROR_EXIT_CODE: i32 = 1;

/// All the error conditions that this crate produces.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum PppError {
    /// Indexed access on a [`crate::CheckedVec`] or [`crate::CheckedString`] was out of
    /// range.
    #[error("index {index} is out of range for length {len}")]
    #[diagnostic(
        code(r3bl_ppp::out_of_range),
        help("Valid indices are 0 up to (but not including) the length.")
    )]
    OutOfRange { index: usize, len: usize },

    /// Indexed access on a [`crate::CheckedSpan`] or [`crate::CheckedSpanMut`] was out
    /// of range. Kept separate from [PppError::OutOfRange] so that misuse of a view can
    /// be told apart from misuse of a container.
    #[error("span range error")]
    #[diagnostic(
        code(r3bl_ppp::span_range),
        help("A span can only be indexed from 0 up to (but not including) its length.")
    )]
    SpanRange { index: usize, len: usize },

    /// Generic application error, produced by [error], [error_with_str] and
    /// [error_with_int].
    #[error("{0}")]
    #[diagnostic(code(r3bl_ppp::error))]
    General(String),

    /// An expectation checked with [`crate::ErrorAction::Throwing`] did not hold.
    #[error("{0}")]
    #[diagnostic(code(r3bl_ppp::expect))]
    Expect(String),

    /// [`crate::narrow`] could not convert a value without losing information.
    #[error("narrowing_error")]
    #[diagnostic(code(r3bl_ppp::narrowing))]
    Narrowing,

    /// Propagate this to the top of your program to leave it in an orderly way.
    #[error("Exit")]
    #[diagnostic(code(r3bl_ppp::exit))]
    Exit,

    /// [`crate::random_int`] was asked for an empty interval.
    #[error("empty range [{min}, {max}]")]
    #[diagnostic(
        code(r3bl_ppp::empty_range),
        help("The lower bound must be less than or equal to the upper bound.")
    )]
    EmptyRange { min: i32, max: i32 },

    /// [`crate::CheckedString::set_at`] would have split a multi byte UTF-8 sequence.
    #[error("byte at index {index} is not ASCII")]
    #[diagnostic(
        code(r3bl_ppp::not_ascii),
        help("Only ASCII bytes can be replaced one at a time in a UTF-8 string.")
    )]
    NotAscii { index: usize },
}

impl PppError {
    /// Same as [error], in the style of a constructor.
    ///
    /// # Errors
    ///
    /// Always returns [PppError::General] with the given message.
    pub fn new_error_result<T>(msg: &str) -> PppResult<T> { error(msg) }

    /// Checks `index` against `len`, which is how the checked containers validate an
    /// access before they perform it.
    ///
    /// # Errors
    ///
    /// Returns [PppError::OutOfRange] if `index >= len`.
    pub fn check_index(index: usize, len: usize) -> PppResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(PppError::OutOfRange { index, len })
        }
    }

    /// Same as [PppError::check_index] but for views.
    ///
    /// # Errors
    ///
    /// Returns [PppError::SpanRange] if `index >= len`.
    pub fn check_span_index(index: usize, len: usize) -> PppResult<()> {
        if index < len {
            Ok(())
        } else {
            Err(PppError::SpanRange { index, len })
        }
    }
}

/// Generic error raising function. Returns [PppError::General] carrying `message`.
///
/// ```
/// use r3bl_ppp::{error, PppError, PppResult};
///
/// fn area(length: i32, width: i32) -> PppResult<i32> {
///     if length <= 0 || width <= 0 {
///         return error("non-positive area() argument");
///     }
///     Ok(length * width)
/// }
///
/// assert_eq!(area(2, 3).unwrap(), 6);
/// assert_eq!(
///     area(-1, 3).unwrap_err(),
///     PppError::General("non-positive area() argument".into())
/// );
/// ```
///
/// # Errors
///
/// Always.
pub fn error<T>(message: impl Into<String>) -> PppResult<T> {
    let message: String = message.into();

    // % is Display, ? is Debug.
    tracing::debug!(message = "raising error", error_message = %message);

    Err(PppError::General(message))
}

/// Raise a [PppError::General] whose message is `message` followed directly by
/// `message_2` (no separator is inserted).
///
/// # Errors
///
/// Always.
pub fn error_with_str<T>(message: &str, message_2: &str) -> PppResult<T> {
    error(format!("{message}{message_2}"))
}

/// Primitive integer types accepted by [error_with_int]. Implemented for all of them,
/// including [usize], so a length can be passed as is.
pub trait ErrorInt: Display + Copy {}

macro_rules! impl_error_int {
    ($($it:ty),+) => { $(impl ErrorInt for $it {})+ };
}

impl_error_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Raise a [PppError::General] whose message is formatted as `"message: value"`.
///
/// ```
/// use r3bl_ppp::{checked_vec, error_with_int, PppError, PppResult};
///
/// let v = checked_vec![1, 2, 3];
/// let result: PppResult<()> = error_with_int("too many elements", v.len());
/// assert_eq!(result, Err(PppError::General("too many elements: 3".into())));
/// ```
///
/// # Errors
///
/// Always.
pub fn error_with_int<T>(message: &str, value: impl ErrorInt) -> PppResult<T> {
    error(format!("{message}: {value}"))
}

/// Propagate a [PppError::Exit] to the top of your program.
///
/// # Errors
///
/// Always.
pub fn request_exit<T>() -> PppResult<T> { Err(PppError::Exit) }

/// Write `error: <message>` to `stderr` and exit the process with
/// [SIMPLE_ERROR_EXIT_CODE]. Nothing is unwound and no destructors run. Use this for
/// conditions that you want to report to the user right away.
pub fn simple_error(message: impl Display) -> ! {
    tracing::error!(message = "simple_error, exiting", error_message = %message);
    eprintln!("error: {message}");
    std::process::exit(SIMPLE_ERROR_EXIT_CODE);
}

#[cfg(test)]
mod tests {
    use miette::Diagnostic;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_error_carries_message() {
        let result: PppResult<()> = error("something broke");
        assert_eq2!(result, Err(PppError::General("something broke".into())));
    }

    #[test]
    fn test_error_with_str_concatenates() {
        let result: PppResult<u8> = error_with_str("bad name: ", "bob");
        assert_eq2!(result, Err(PppError::General("bad name: bob".into())));

        // No separator is added.
        let result: PppResult<u8> = error_with_str("foo", "bar");
        assert_eq2!(result.unwrap_err().to_string(), "foobar");
    }

    #[test_case("bad value", 42, "bad value: 42")]
    #[test_case("negative", -7, "negative: -7")]
    #[test_case("", 0, ": 0")]
    fn test_error_with_int_formats(message: &str, value: i32, expected: &str) {
        let result: PppResult<()> = error_with_int(message, value);
        assert_eq2!(result.unwrap_err().to_string(), expected);
    }

    #[test]
    fn test_error_with_int_takes_any_integer_width() {
        let v = [10, 20, 30];
        let result: PppResult<()> = error_with_int("length", v.len());
        assert_eq2!(result.unwrap_err().to_string(), "length: 3");

        let result: PppResult<()> = error_with_int("big", u64::MAX);
        assert_eq2!(
            result.unwrap_err().to_string(),
            "big: 18446744073709551615"
        );

        let result: PppResult<()> = error_with_int("small", i128::MIN);
        assert_eq2!(
            result.unwrap_err().to_string(),
            format!("small: {}", i128::MIN)
        );
    }

    #[test]
    fn test_new_error_result_matches_error() {
        let lhs: PppResult<()> = PppError::new_error_result("same");
        let rhs: PppResult<()> = error("same");
        assert_eq2!(lhs, rhs);
    }

    #[test]
    fn test_check_index() {
        assert!(PppError::check_index(0, 1).is_ok());
        assert_eq2!(
            PppError::check_index(1, 1),
            Err(PppError::OutOfRange { index: 1, len: 1 })
        );
        assert_eq2!(
            PppError::check_index(0, 0),
            Err(PppError::OutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_check_span_index() {
        assert!(PppError::check_span_index(2, 3).is_ok());
        assert_eq2!(
            PppError::check_span_index(3, 3),
            Err(PppError::SpanRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_display_strings() {
        assert_eq2!(PppError::SpanRange { index: 9, len: 1 }.to_string(), "span range error");
        assert_eq2!(PppError::Narrowing.to_string(), "narrowing_error");
        assert_eq2!(PppError::Exit.to_string(), "Exit");
        assert_eq2!(
            PppError::OutOfRange { index: 5, len: 3 }.to_string(),
            "index 5 is out of range for length 3"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let code = PppError::Narrowing.code().map(|it| it.to_string());
        assert_eq2!(code.as_deref(), Some("r3bl_ppp::narrowing"));

        let code = PppError::SpanRange { index: 0, len: 0 }
            .code()
            .map(|it| it.to_string());
        assert_eq2!(code.as_deref(), Some("r3bl_ppp::span_range"));
    }

    #[test]
    fn test_converts_into_miette_report() {
        fn lifted() -> miette::Result<()> {
            error::<()>("lifted")?;
            Ok(())
        }
        let report = lifted().unwrap_err();
        assert_eq2!(report.to_string(), "lifted");
        assert_eq2!(
            report.downcast_ref::<PppError>(),
            Some(&PppError::General("lifted".into()))
        );
    }

    #[test]
    fn test_request_exit() {
        let result: PppResult<()> = request_exit();
        assert_eq2!(result, Err(PppError::Exit));
    }
}
