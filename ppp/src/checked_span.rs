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

//! Range-checked views over a contiguous range of elements that somebody else owns.
//!
//! [CheckedSpan] wraps a `&[T]` and [CheckedSpanMut] wraps a `&mut [T]`. Neither one
//! copies or owns the elements. The borrow checker ties the view to the lifetime of the
//! range it was made from, so a view can't outlive (or observe a resize of) its range.
//!
//! A failed access on a view is always a [PppError::SpanRange], which is distinct from
//! the [PppError::OutOfRange] that the owning containers produce.

use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::{CheckedAccess, CheckedVec, PppError, PppResult, accessor_trace};

/// Read-only range-checked view.
///
/// ```
/// use r3bl_ppp::{CheckedSpan, PppError};
///
/// let numbers = vec![1, 2, 3, 4];
/// let span = CheckedSpan::new(&numbers[1..]);
/// assert_eq!(span.len(), 3);
/// assert_eq!(span.at(0), Ok(&2));
/// assert_eq!(span.at(3), Err(PppError::SpanRange { index: 3, len: 3 }));
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CheckedSpan<'a, T> {
    slice: &'a [T],
}

/// Mutable range-checked view.
///
/// ```
/// use r3bl_ppp::CheckedSpanMut;
///
/// let mut numbers = [1, 2, 3];
/// let mut span = CheckedSpanMut::new(&mut numbers);
/// *span.at_mut(2).unwrap() = 30;
/// assert!(span.at_mut(3).is_err());
/// assert_eq!(numbers, [1, 2, 30]);
/// ```
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct CheckedSpanMut<'a, T> {
    slice: &'a mut [T],
}

mod span {
    use super::{CheckedAccess,
                CheckedSpan,
                CheckedVec,
                Deref,
                Index,
                PppError,
                PppResult,
                accessor_trace};

    // Not derived, since that would require `T: Clone`.
    impl<T> Clone for CheckedSpan<'_, T> {
        fn clone(&self) -> Self { *self }
    }

    impl<T> Copy for CheckedSpan<'_, T> {}

    impl<'a, T> CheckedSpan<'a, T> {
        #[must_use]
        pub const fn new(slice: &'a [T]) -> Self { Self { slice } }

        #[must_use]
        pub const fn as_slice(&self) -> &'a [T] { self.slice }

        /// Range-checked read access. The returned reference borrows from the underlying
        /// range, not from the view.
        ///
        /// # Errors
        ///
        /// [PppError::SpanRange] if `index >= len()`.
        pub fn at(&self, index: usize) -> PppResult<&'a T> {
            accessor_trace::write(accessor_trace::SPAN_AT);
            let slice: &'a [T] = self.slice;
            PppError::check_span_index(index, slice.len())?;
            Ok(&slice[index])
        }

        /// View of the first `count` elements.
        ///
        /// # Errors
        ///
        /// [PppError::SpanRange] (with `index` set to `count`) if `count > len()`.
        pub fn first(&self, count: usize) -> PppResult<CheckedSpan<'a, T>> {
            self.subspan(0, count)
        }

        /// View of the last `count` elements.
        ///
        /// # Errors
        ///
        /// [PppError::SpanRange] (with `index` set to `count`) if `count > len()`.
        pub fn last(&self, count: usize) -> PppResult<CheckedSpan<'a, T>> {
            let len = self.slice.len();
            match len.checked_sub(count) {
                Some(offset) => self.subspan(offset, count),
                None => Err(PppError::SpanRange { index: count, len }),
            }
        }

        /// View of `count` elements starting at `offset`.
        ///
        /// # Errors
        ///
        /// [PppError::SpanRange] (with `index` set to the end of the requested range) if
        /// `offset + count > len()`.
        pub fn subspan(
            &self,
            offset: usize,
            count: usize,
        ) -> PppResult<CheckedSpan<'a, T>> {
            let slice: &'a [T] = self.slice;
            let len = slice.len();
            let end = offset.saturating_add(count);
            slice
                .get(offset..end)
                .map(CheckedSpan::new)
                .ok_or(PppError::SpanRange { index: end, len })
        }
    }

    impl<T> CheckedAccess for CheckedSpan<'_, T> {
        type Element = T;

        fn checked_len(&self) -> usize { self.slice.len() }

        fn at(&self, index: usize) -> PppResult<&T> { CheckedSpan::at(self, index) }
    }

    impl<T> Index<usize> for CheckedSpan<'_, T> {
        type Output = T;

        fn index(&self, index: usize) -> &T {
            accessor_trace::write(accessor_trace::SPAN_INDEX);
            if let Err(err) = PppError::check_span_index(index, self.slice.len()) {
                panic!("{err}");
            }
            &self.slice[index]
        }
    }

    impl<T> Deref for CheckedSpan<'_, T> {
        type Target = [T];

        fn deref(&self) -> &Self::Target { self.slice }
    }

    impl<'a, T> From<&'a [T]> for CheckedSpan<'a, T> {
        fn from(slice: &'a [T]) -> Self { Self::new(slice) }
    }

    impl<'a, T, const N: usize> From<&'a [T; N]> for CheckedSpan<'a, T> {
        fn from(array: &'a [T; N]) -> Self { Self::new(array) }
    }

    impl<'a, T> From<&'a Vec<T>> for CheckedSpan<'a, T> {
        fn from(vec: &'a Vec<T>) -> Self { Self::new(vec) }
    }

    impl<'a, T> From<&'a CheckedVec<T>> for CheckedSpan<'a, T> {
        fn from(vec: &'a CheckedVec<T>) -> Self { vec.as_span() }
    }

    impl<'a, T> IntoIterator for CheckedSpan<'a, T> {
        type Item = &'a T;
        type IntoIter = std::slice::Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.slice.iter() }
    }
}

mod span_mut {
    use super::{CheckedAccess,
                CheckedSpan,
                CheckedSpanMut,
                Deref,
                DerefMut,
                Index,
                IndexMut,
                PppError,
                PppResult,
                accessor_trace};

    impl<'a, T> CheckedSpanMut<'a, T> {
        pub fn new(slice: &'a mut [T]) -> Self { Self { slice } }

        /// Reborrow as a read-only view.
        #[must_use]
        pub fn as_span(&self) -> CheckedSpan<'_, T> { CheckedSpan::new(&*self.slice) }

        /// Range-checked read access.
        ///
        /// # Errors
        ///
        /// [PppError::SpanRange] if `index >= len()`.
        pub fn at(&self, index: usize) -> PppResult<&T> {
            accessor_trace::write(accessor_trace::SPAN_MUT_AT);
            PppError::check_span_index(index, self.slice.len())?;
            Ok(&self.slice[index])
        }

        /// Range-checked write access.
        ///
        /// # Errors
        ///
        /// [PppError::SpanRange] if `index >= len()`.
        pub fn at_mut(&mut self, index: usize) -> PppResult<&mut T> {
            accessor_trace::write(accessor_trace::SPAN_MUT_AT_MUT);
            PppError::check_span_index(index, self.slice.len())?;
            Ok(&mut self.slice[index])
        }
    }

    impl<T> CheckedAccess for CheckedSpanMut<'_, T> {
        type Element = T;

        fn checked_len(&self) -> usize { self.slice.len() }

        fn at(&self, index: usize) -> PppResult<&T> { CheckedSpanMut::at(self, index) }
    }

    impl<T> Index<usize> for CheckedSpanMut<'_, T> {
        type Output = T;

        fn index(&self, index: usize) -> &T {
            accessor_trace::write(accessor_trace::SPAN_MUT_INDEX);
            if let Err(err) = PppError::check_span_index(index, self.slice.len()) {
                panic!("{err}");
            }
            &self.slice[index]
        }
    }

    impl<T> IndexMut<usize> for CheckedSpanMut<'_, T> {
        fn index_mut(&mut self, index: usize) -> &mut T {
            accessor_trace::write(accessor_trace::SPAN_MUT_INDEX_MUT);
            if let Err(err) = PppError::check_span_index(index, self.slice.len()) {
                panic!("{err}");
            }
            &mut self.slice[index]
        }
    }

    impl<T> Deref for CheckedSpanMut<'_, T> {
        type Target = [T];

        fn deref(&self) -> &Self::Target { &*self.slice }
    }

    impl<T> DerefMut for CheckedSpanMut<'_, T> {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut *self.slice }
    }

    impl<'a, T> From<&'a mut [T]> for CheckedSpanMut<'a, T> {
        fn from(slice: &'a mut [T]) -> Self { Self::new(slice) }
    }

    impl<'a, T> From<&'a mut Vec<T>> for CheckedSpanMut<'a, T> {
        fn from(vec: &'a mut Vec<T>) -> Self { Self::new(vec) }
    }
}
