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

use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::{CheckedAccess,
            CheckedSpan,
            CheckedSpanMut,
            PppError,
            PppResult,
            accessor_trace};

/// A growable array whose indexed access is range checked.
///
/// It owns a [Vec] and hands out every [Vec] operation unchanged (via [Deref] and
/// [DerefMut]), *except* indexed access:
/// - [CheckedVec::at] and [CheckedVec::at_mut] return a [PppError::OutOfRange] when the
///   index is not in `0..len()`.
/// - `v[i]` ([Index] and [IndexMut]) panics with the same message, since these traits
///   can't return a [Result].
///
/// Every indexed access writes a line from [accessor_trace] to `stderr`.
///
/// # Examples
///
/// ```
/// use r3bl_ppp::{checked_vec, CheckedVec, PppError};
///
/// let mut v: CheckedVec<i32> = checked_vec![1, 2, 3];
/// v.push(4);
/// *v.at_mut(0).unwrap() = 10;
///
/// assert_eq!(v.at(0), Ok(&10));
/// assert_eq!(v[3], 4);
/// assert_eq!(v.at(4), Err(PppError::OutOfRange { index: 4, len: 4 }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckedVec<T> {
    inner: Vec<T>,
}

mod constructor {
    use super::CheckedVec;

    impl<T> Default for CheckedVec<T> {
        fn default() -> Self { Self::new() }
    }

    impl<T> CheckedVec<T> {
        #[must_use]
        pub const fn new() -> Self { Self { inner: Vec::new() } }

        #[must_use]
        pub fn with_capacity(capacity: usize) -> Self {
            Self {
                inner: Vec::with_capacity(capacity),
            }
        }

        /// `count` copies of `value`.
        #[must_use]
        pub fn from_elem(value: T, count: usize) -> Self
        where
            T: Clone,
        {
            Self {
                inner: vec![value; count],
            }
        }

        /// `count` default values.
        #[must_use]
        pub fn with_len(count: usize) -> Self
        where
            T: Default,
        {
            std::iter::repeat_with(T::default).take(count).collect()
        }

        /// Give back the underlying [Vec].
        #[must_use]
        pub fn into_inner(self) -> Vec<T> { self.inner }

        #[must_use]
        pub fn as_vec(&self) -> &Vec<T> { &self.inner }
    }

    impl<T> From<Vec<T>> for CheckedVec<T> {
        fn from(inner: Vec<T>) -> Self { Self { inner } }
    }

    impl<T, const N: usize> From<[T; N]> for CheckedVec<T> {
        fn from(array: [T; N]) -> Self { Self::from(Vec::from(array)) }
    }

    impl<T: Clone> From<&[T]> for CheckedVec<T> {
        fn from(slice: &[T]) -> Self { Self::from(slice.to_vec()) }
    }

    impl<T> From<CheckedVec<T>> for Vec<T> {
        fn from(checked: CheckedVec<T>) -> Self { checked.inner }
    }

    impl<T> FromIterator<T> for CheckedVec<T> {
        fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
            Self::from(iter.into_iter().collect::<Vec<T>>())
        }
    }
}

mod access {
    use super::{CheckedAccess,
                CheckedSpan,
                CheckedSpanMut,
                CheckedVec,
                Index,
                IndexMut,
                PppError,
                PppResult,
                accessor_trace};

    impl<T> CheckedVec<T> {
        /// Range-checked read access.
        ///
        /// # Errors
        ///
        /// [PppError::OutOfRange] if `index >= len()`.
        pub fn at(&self, index: usize) -> PppResult<&T> {
            accessor_trace::write(accessor_trace::VEC_AT);
            PppError::check_index(index, self.inner.len())?;
            Ok(&self.inner[index])
        }

        /// Range-checked write access.
        ///
        /// # Errors
        ///
        /// [PppError::OutOfRange] if `index >= len()`.
        pub fn at_mut(&mut self, index: usize) -> PppResult<&mut T> {
            accessor_trace::write(accessor_trace::VEC_AT_MUT);
            PppError::check_index(index, self.inner.len())?;
            Ok(&mut self.inner[index])
        }

        /// Borrow the elements as a range-checked view.
        #[must_use]
        pub fn as_span(&self) -> CheckedSpan<'_, T> { CheckedSpan::new(&self.inner) }

        /// Borrow the elements as a mutable range-checked view.
        pub fn as_span_mut(&mut self) -> CheckedSpanMut<'_, T> {
            CheckedSpanMut::new(&mut self.inner)
        }
    }

    impl<T> CheckedAccess for CheckedVec<T> {
        type Element = T;

        fn checked_len(&self) -> usize { self.inner.len() }

        fn at(&self, index: usize) -> PppResult<&T> { CheckedVec::at(self, index) }
    }

    impl<T> Index<usize> for CheckedVec<T> {
        type Output = T;

        fn index(&self, index: usize) -> &T {
            accessor_trace::write(accessor_trace::VEC_INDEX);
            if let Err(err) = PppError::check_index(index, self.inner.len()) {
                panic!("{err}");
            }
            &self.inner[index]
        }
    }

    impl<T> IndexMut<usize> for CheckedVec<T> {
        fn index_mut(&mut self, index: usize) -> &mut T {
            accessor_trace::write(accessor_trace::VEC_INDEX_MUT);
            if let Err(err) = PppError::check_index(index, self.inner.len()) {
                panic!("{err}");
            }
            &mut self.inner[index]
        }
    }
}

mod deref {
    use super::{CheckedVec, Deref, DerefMut};

    impl<T> Deref for CheckedVec<T> {
        type Target = Vec<T>;

        fn deref(&self) -> &Self::Target { &self.inner }
    }

    impl<T> DerefMut for CheckedVec<T> {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.inner }
    }

    impl<T> AsRef<[T]> for CheckedVec<T> {
        fn as_ref(&self) -> &[T] { &self.inner }
    }
}

mod iterator {
    use super::CheckedVec;

    impl<T> IntoIterator for CheckedVec<T> {
        type Item = T;
        type IntoIter = std::vec::IntoIter<T>;

        fn into_iter(self) -> Self::IntoIter { self.inner.into_iter() }
    }

    impl<'a, T> IntoIterator for &'a CheckedVec<T> {
        type Item = &'a T;
        type IntoIter = std::slice::Iter<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.inner.iter() }
    }

    impl<'a, T> IntoIterator for &'a mut CheckedVec<T> {
        type Item = &'a mut T;
        type IntoIter = std::slice::IterMut<'a, T>;

        fn into_iter(self) -> Self::IntoIter { self.inner.iter_mut() }
    }

    impl<T> Extend<T> for CheckedVec<T> {
        fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
            self.inner.extend(iter);
        }
    }
}
