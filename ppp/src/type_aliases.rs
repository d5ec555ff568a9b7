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

//! Short names for types that exercises refer to often.

use crate::CheckedAccess;

/// Wide signed integer used to hold a code point, or any character code outside the
/// range of [char].
pub type Unicode = i64;

/// The element type of a checked container `C`, ie, what [CheckedAccess::at] returns a
/// reference to. `T` for [`crate::CheckedVec<T>`], [`crate::CheckedSpan<T>`] and
/// [`crate::CheckedSpanMut<T>`], and [u8] for [`crate::CheckedString`].
pub type ValueType<C> = <C as CheckedAccess>::Element;

/// The iterator type of `C`. For an owned container it yields [ValueType], for a
/// borrowed container or a view it yields references to it.
pub type IteratorType<C> = <C as IntoIterator>::IntoIter;

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;
    use crate::{CheckedSpan, CheckedSpanMut, CheckedString, CheckedVec, assert_eq2,
                checked_vec, narrow};

    fn type_of<T: 'static>() -> TypeId { TypeId::of::<T>() }

    fn sum_all<C>(container: C) -> i64
    where
        C: CheckedAccess + IntoIterator<Item = ValueType<C>>,
        ValueType<C>: Into<i64>,
    {
        let iter: IteratorType<C> = container.into_iter();
        iter.map(|it| -> i64 { it.into() }).sum()
    }

    #[test]
    fn test_value_type_is_the_element_type() {
        assert_eq2!(type_of::<ValueType<CheckedVec<u16>>>(), type_of::<u16>());
        assert_eq2!(type_of::<ValueType<CheckedString>>(), type_of::<u8>());
        assert_eq2!(
            type_of::<ValueType<CheckedSpan<'static, u16>>>(),
            type_of::<u16>()
        );
        assert_eq2!(
            type_of::<ValueType<CheckedSpanMut<'static, u16>>>(),
            type_of::<u16>()
        );
    }

    #[test]
    fn test_iterator_type() {
        assert_eq2!(
            type_of::<IteratorType<CheckedVec<u16>>>(),
            type_of::<std::vec::IntoIter<u16>>()
        );
        assert_eq2!(
            type_of::<IteratorType<CheckedString>>(),
            type_of::<std::vec::IntoIter<u8>>()
        );
        assert_eq2!(
            type_of::<IteratorType<CheckedSpan<'static, u16>>>(),
            type_of::<std::slice::Iter<'static, u16>>()
        );
    }

    #[test]
    fn test_generic_code_over_aliases() {
        let numbers: CheckedVec<i32> = checked_vec![1, 2, 3, 4];
        assert_eq2!(sum_all(numbers), 10);
        assert_eq2!(sum_all(CheckedString::from("AB")), 65 + 66);
    }

    #[test]
    fn test_unicode_holds_any_code_point() {
        let code: Unicode = Unicode::from(u32::from('€'));
        assert_eq2!(code, 0x20AC);
        let s = CheckedString::from("A");
        let first: Unicode = Unicode::from(*s.at(0).unwrap());
        assert_eq2!(narrow::<u8, _>(first), Ok(b'A'));
    }
}
