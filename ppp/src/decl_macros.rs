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

/// Syntactic sugar for `Ok(())` and `Ok($value)`. Saves some typing at the end of
/// functions that return a [`crate::PppResult`] or [miette::Result].
///
/// ```
/// use r3bl_ppp::{ok, PppResult};
///
/// fn nothing() -> PppResult<()> { ok!() }
/// fn forty_two() -> PppResult<i32> { ok!(42) }
///
/// assert!(nothing().is_ok());
/// assert_eq!(forty_two().unwrap(), 42);
/// ```
#[macro_export]
macro_rules! ok {
    // No args.
    () => {
        Ok(())
    };
    // With arg.
    ($value:expr) => {
        Ok($value)
    };
}

/// A wrapper for `pretty_assertions::assert_eq!` macro.
#[macro_export]
macro_rules! assert_eq2 {
    ($($params:tt)*) => {
        pretty_assertions::assert_eq!($($params)*)
    };
}

/// Create a [`crate::CheckedVec`] the same way you'd create a [Vec] using [vec!].
///
/// ```
/// use r3bl_ppp::{checked_vec, CheckedVec};
///
/// let empty: CheckedVec<i32> = checked_vec![];
/// assert!(empty.is_empty());
///
/// let zeros = checked_vec![0; 4];
/// assert_eq!(zeros.len(), 4);
///
/// let v = checked_vec![1, 2, 3];
/// assert_eq!(v.len(), 3);
/// ```
#[macro_export]
macro_rules! checked_vec {
    () => {
        $crate::CheckedVec::new()
    };
    ($elem:expr; $count:expr) => {
        $crate::CheckedVec::from(vec![$elem; $count])
    };
    ($($element:expr),+ $(,)?) => {
        $crate::CheckedVec::from(vec![$($element),+])
    };
}
