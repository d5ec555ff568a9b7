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

//! The seam shared by all the range-checked types: the [CheckedAccess] trait, the
//! generic [element_at] function, and the [accessor_trace] lines that every indexed
//! access writes to `stderr`.

use crate::PppResult;

/// Read-only, range-checked element access. Implemented by [`crate::CheckedVec`],
/// [`crate::CheckedString`], [`crate::CheckedSpan`] and [`crate::CheckedSpanMut`].
pub trait CheckedAccess {
    type Element;

    /// Number of elements that can be accessed, ie, valid indices are `0..checked_len()`.
    fn checked_len(&self) -> usize;

    /// Returns the element at `index`, or an error if `index >= checked_len()`. Never
    /// reads out of bounds.
    ///
    /// # Errors
    ///
    /// The range error of the implementing type.
    fn at(&self, index: usize) -> PppResult<&Self::Element>;
}

/// Generic form of [CheckedAccess::at].
///
/// ```
/// use r3bl_ppp::{checked_vec, element_at, CheckedString, PppError};
///
/// let v = checked_vec!['a', 'b'];
/// assert_eq!(element_at(&v, 1), Ok(&'b'));
///
/// let s = CheckedString::from("abc");
/// assert_eq!(element_at(&s, 5), Err(PppError::OutOfRange { index: 5, len: 3 }));
/// ```
///
/// # Errors
///
/// The range error of the container type, when `index` is out of range.
pub fn element_at<C>(container: &C, index: usize) -> PppResult<&C::Element>
where
    C: CheckedAccess + ?Sized,
{
    container.at(index)
}

/// Each accessor on the checked types writes one of these lines to `stderr` every time
/// it is called. This is not configurable. It is there so that learners can see which
/// accessor their code actually ran.
pub mod accessor_trace {
    use std::io::Write;

    pub const VEC_AT: &str = "CheckedVec::at";
    pub const VEC_AT_MUT: &str = "CheckedVec::at_mut";
    pub const VEC_INDEX: &str = "CheckedVec::index";
    pub const VEC_INDEX_MUT: &str = "CheckedVec::index_mut";

    pub const STRING_AT: &str = "CheckedString::at";
    pub const STRING_SET_AT: &str = "CheckedString::set_at";
    pub const STRING_INDEX: &str = "CheckedString::index";

    pub const SPAN_AT: &str = "CheckedSpan::at";
    pub const SPAN_INDEX: &str = "CheckedSpan::index";

    pub const SPAN_MUT_AT: &str = "CheckedSpanMut::at";
    pub const SPAN_MUT_AT_MUT: &str = "CheckedSpanMut::at_mut";
    pub const SPAN_MUT_INDEX: &str = "CheckedSpanMut::index";
    pub const SPAN_MUT_INDEX_MUT: &str = "CheckedSpanMut::index_mut";

    /// Write `accessor` on its own line to `stderr`. A failed write is ignored, since
    /// there is nowhere else to report it.
    pub fn write(accessor: &str) {
        let mut stderr = std::io::stderr().lock();
        _ = writeln!(stderr, "{accessor}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CheckedSpan, CheckedString, CheckedVec, PppError, assert_eq2};

    fn first_or_error<C: CheckedAccess>(container: &C) -> PppResult<&C::Element> {
        element_at(container, 0)
    }

    #[test]
    fn test_element_at_in_range_matches_unchecked_access() {
        let source = vec![10, 20, 30];
        let v = CheckedVec::from(source.clone());
        for (index, expected) in source.iter().enumerate() {
            assert_eq2!(element_at(&v, index), Ok(expected));
        }
    }

    #[test]
    fn test_element_at_out_of_range_for_each_type() {
        let v: CheckedVec<u8> = CheckedVec::from(vec![1, 2]);
        assert_eq2!(
            element_at(&v, 2),
            Err(PppError::OutOfRange { index: 2, len: 2 })
        );

        let s = CheckedString::from("hi");
        assert_eq2!(
            element_at(&s, 7),
            Err(PppError::OutOfRange { index: 7, len: 2 })
        );

        let array = [1, 2, 3];
        let span = CheckedSpan::new(&array);
        assert_eq2!(
            element_at(&span, 3),
            Err(PppError::SpanRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_generic_over_checked_access() {
        let empty: CheckedVec<i32> = CheckedVec::new();
        assert!(first_or_error(&empty).is_err());
        assert_eq2!(first_or_error(&CheckedString::from("z")), Ok(&b'z'));
        assert_eq2!(empty.checked_len(), 0);
    }

    #[test]
    fn test_failures_match_the_range_check_helpers() {
        let v: CheckedVec<u8> = CheckedVec::from(vec![7, 8, 9]);
        let s = CheckedString::from("xyz");
        let array = [1_u8, 2, 3];
        let span = CheckedSpan::new(&array);

        for index in 0..6 {
            assert_eq2!(
                element_at(&v, index).err(),
                PppError::check_index(index, 3).err()
            );
            assert_eq2!(
                element_at(&s, index).err(),
                PppError::check_index(index, 3).err()
            );
            assert_eq2!(
                element_at(&span, index).err(),
                PppError::check_span_index(index, 3).err()
            );
        }
    }
}
