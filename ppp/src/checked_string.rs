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

use std::{borrow::Borrow,
          convert::Infallible,
          fmt::{Display, Formatter},
          hash::{Hash, Hasher},
          ops::{AddAssign, Deref, DerefMut, Index},
          str::FromStr};

use crate::{CheckedAccess, PppError, PppResult, accessor_trace};

/// A text string whose indexed access is range checked.
///
/// It owns a [String] and hands out every [String] operation unchanged (via [Deref] and
/// [DerefMut]) except indexed access. The element type is the UTF-8 byte ([u8]):
/// - [CheckedString::at] returns [PppError::OutOfRange] when the index is not in
///   `0..len()`, and `s[i]` panics with the same message.
/// - [CheckedString::set_at] replaces a single byte. Only an ASCII byte can replace
///   another ASCII byte, anything else would produce invalid UTF-8.
///
/// Its [Hash] is the hash of the underlying [String], and it implements [`Borrow<str>`],
/// so it works as a [std::collections::HashMap] key that you can look up with a `&str`.
///
/// ```
/// use std::collections::HashMap;
/// use r3bl_ppp::{CheckedString, PppError};
///
/// let s = CheckedString::from("abc");
/// assert_eq!(s.at(1), Ok(&b'b'));
/// assert_eq!(s.at(5), Err(PppError::OutOfRange { index: 5, len: 3 }));
///
/// let mut ages: HashMap<CheckedString, u32> = HashMap::new();
/// ages.insert("ada".into(), 36);
/// assert_eq!(ages.get("ada"), Some(&36));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct CheckedString {
    inner: String,
}

mod constructor {
    use super::{CheckedString, FromStr, Infallible};

    impl CheckedString {
        #[must_use]
        pub const fn new() -> Self {
            Self {
                inner: String::new(),
            }
        }

        #[must_use]
        pub fn with_capacity(capacity: usize) -> Self {
            Self {
                inner: String::with_capacity(capacity),
            }
        }

        /// Give back the underlying [String].
        #[must_use]
        pub fn into_inner(self) -> String { self.inner }

        #[must_use]
        pub fn as_string(&self) -> &String { &self.inner }
    }

    impl From<String> for CheckedString {
        fn from(inner: String) -> Self { Self { inner } }
    }

    impl From<&str> for CheckedString {
        fn from(text: &str) -> Self { Self::from(text.to_string()) }
    }

    impl From<CheckedString> for String {
        fn from(checked: CheckedString) -> Self { checked.inner }
    }

    impl FromStr for CheckedString {
        type Err = Infallible;

        fn from_str(text: &str) -> Result<Self, Self::Err> { Ok(Self::from(text)) }
    }

    impl FromIterator<char> for CheckedString {
        fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
            Self::from(iter.into_iter().collect::<String>())
        }
    }
}

mod access {
    use super::{CheckedAccess, CheckedString, Index, PppError, PppResult, accessor_trace};

    impl CheckedString {
        /// Range-checked read access to the byte at `index`.
        ///
        /// # Errors
        ///
        /// [PppError::OutOfRange] if `index >= len()`.
        pub fn at(&self, index: usize) -> PppResult<&u8> {
            accessor_trace::write(accessor_trace::STRING_AT);
            let bytes = self.inner.as_bytes();
            PppError::check_index(index, bytes.len())?;
            Ok(&bytes[index])
        }

        /// Range-checked write access to the byte at `index`.
        ///
        /// # Errors
        ///
        /// - [PppError::OutOfRange] if `index >= len()`.
        /// - [PppError::NotAscii] if the existing byte or `byte` is not ASCII.
        pub fn set_at(&mut self, index: usize, byte: u8) -> PppResult<()> {
            accessor_trace::write(accessor_trace::STRING_SET_AT);
            PppError::check_index(index, self.inner.len())?;

            let existing = self.inner.as_bytes()[index];
            if !existing.is_ascii() || !byte.is_ascii() {
                return Err(PppError::NotAscii { index });
            }

            // Both bytes are ASCII, so `index..index + 1` is on char boundaries.
            let mut buffer = [0_u8; 4];
            let replacement = char::from(byte).encode_utf8(&mut buffer);
            self.inner.replace_range(index..=index, replacement);

            Ok(())
        }
    }

    impl CheckedAccess for CheckedString {
        type Element = u8;

        fn checked_len(&self) -> usize { self.inner.len() }

        fn at(&self, index: usize) -> PppResult<&u8> { CheckedString::at(self, index) }
    }

    impl Index<usize> for CheckedString {
        type Output = u8;

        fn index(&self, index: usize) -> &u8 {
            accessor_trace::write(accessor_trace::STRING_INDEX);
            let bytes = self.inner.as_bytes();
            if let Err(err) = PppError::check_index(index, bytes.len()) {
                panic!("{err}");
            }
            &bytes[index]
        }
    }
}

mod deref {
    use super::{AddAssign, Borrow, CheckedString, Deref, DerefMut, Display, Formatter};

    impl Deref for CheckedString {
        type Target = String;

        fn deref(&self) -> &Self::Target { &self.inner }
    }

    impl DerefMut for CheckedString {
        fn deref_mut(&mut self) -> &mut Self::Target { &mut self.inner }
    }

    impl AsRef<str> for CheckedString {
        fn as_ref(&self) -> &str { &self.inner }
    }

    impl Borrow<str> for CheckedString {
        fn borrow(&self) -> &str { &self.inner }
    }

    impl Display for CheckedString {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            Display::fmt(&self.inner, f)
        }
    }

    impl AddAssign<&str> for CheckedString {
        fn add_assign(&mut self, rhs: &str) { self.inner.push_str(rhs); }
    }
}

mod compare {
    use super::CheckedString;

    impl PartialEq<str> for CheckedString {
        fn eq(&self, other: &str) -> bool { self.inner == other }
    }

    impl PartialEq<&str> for CheckedString {
        fn eq(&self, other: &&str) -> bool { self.inner == *other }
    }

    impl PartialEq<String> for CheckedString {
        fn eq(&self, other: &String) -> bool { &self.inner == other }
    }
}

/// Iteration is over the bytes, the same element type as [CheckedString::at].
mod iterator {
    use super::CheckedString;

    impl IntoIterator for CheckedString {
        type Item = u8;
        type IntoIter = std::vec::IntoIter<u8>;

        fn into_iter(self) -> Self::IntoIter { self.inner.into_bytes().into_iter() }
    }

    impl<'a> IntoIterator for &'a CheckedString {
        type Item = &'a u8;
        type IntoIter = std::slice::Iter<'a, u8>;

        fn into_iter(self) -> Self::IntoIter { self.inner.as_bytes().iter() }
    }
}

/// Delegates to the [Hash] of the underlying [String], which is the same as the hash of
/// the equivalent `str`. This keeps [`Borrow<str>`] lookups consistent.
impl Hash for CheckedString {
    fn hash<H: Hasher>(&self, state: &mut H) { self.inner.hash(state); }
}

#[cfg(test)]
mod tests {
    use std::{collections::{HashMap, HashSet},
              hash::{BuildHasher, RandomState}};

    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_abc_index_5_is_out_of_range() {
        let s = CheckedString::from("abc");
        assert_eq2!(s.at(5), Err(PppError::OutOfRange { index: 5, len: 3 }));
    }

    #[test]
    fn test_at_in_range_matches_bytes() {
        let raw = "hello";
        let s = CheckedString::from(raw);
        for (index, byte) in raw.bytes().enumerate() {
            assert_eq2!(s.at(index), Ok(&byte));
            assert_eq2!(s[index], byte);
        }
    }

    #[test]
    #[should_panic(expected = "index 3 is out of range for length 3")]
    fn test_index_out_of_range_panics() {
        let s = CheckedString::from("abc");
        let _ = s[3];
    }

    #[test]
    fn test_set_at() {
        let mut s = CheckedString::from("cat");
        s.set_at(0, b'b').unwrap();
        assert_eq2!(s, "bat");

        assert_eq2!(
            s.set_at(3, b'x'),
            Err(PppError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq2!(s.set_at(1, 0xC3), Err(PppError::NotAscii { index: 1 }));
        assert_eq2!(s, "bat");
    }

    #[test]
    fn test_set_at_refuses_to_split_multibyte_char() {
        // 'é' is 2 bytes in UTF-8.
        let mut s = CheckedString::from("café");
        assert_eq2!(s.len(), 5);
        assert_eq2!(s.set_at(3, b'e'), Err(PppError::NotAscii { index: 3 }));
        assert_eq2!(s, "café");
    }

    #[test]
    fn test_string_operations_pass_through() {
        let mut s = CheckedString::new();
        s.push_str("foo");
        s.push('!');
        s += "bar";
        assert_eq2!(s.as_str(), "foo!bar");
        assert_eq2!(s.to_uppercase(), "FOO!BAR");
        assert_eq2!(s.find('!'), Some(3));
        assert_eq2!(format!("<{s}>"), "<foo!bar>");

        let parsed: CheckedString = "xyz".parse().unwrap();
        assert_eq2!(parsed, String::from("xyz"));
        assert_eq2!(parsed.into_inner(), "xyz");
    }

    #[test]
    fn test_hash_is_same_as_string_hash() {
        let state = RandomState::new();
        let checked = CheckedString::from("key");
        assert_eq2!(
            state.hash_one(&checked),
            state.hash_one(&String::from("key"))
        );
        assert_eq2!(state.hash_one(&checked), state.hash_one("key"));
    }

    #[test]
    fn test_usable_as_hash_map_key() {
        let mut map: HashMap<CheckedString, i32> = HashMap::new();
        map.insert(CheckedString::from("one"), 1);
        map.insert(CheckedString::from("two"), 2);
        map.insert(CheckedString::from("one"), 11);

        assert_eq2!(map.len(), 2);
        assert_eq2!(map.get(&CheckedString::from("one")), Some(&11));
        assert_eq2!(map.get("two"), Some(&2));
        assert_eq2!(map.get("three"), None);

        let set: HashSet<CheckedString> = ["a", "b", "a"].into_iter().map(Into::into).collect();
        assert_eq2!(set.len(), 2);
    }

    #[test]
    fn test_iterates_over_bytes() {
        let s = CheckedString::from("hé");
        let borrowed: Vec<u8> = (&s).into_iter().copied().collect();
        assert_eq2!(borrowed, vec![b'h', 0xC3, 0xA9]);
        let owned: Vec<u8> = s.into_iter().collect();
        assert_eq2!(owned, vec![b'h', 0xC3, 0xA9]);
    }
}
