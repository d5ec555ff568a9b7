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

//! # r3bl_ppp
//!
//! Small support library for people who are learning systems programming. It gives a
//! single, uniform vocabulary for a handful of things that beginners trip over:
//!
//! 1. Range-checked containers: [CheckedVec], [CheckedString], [CheckedSpan] and
//!    [CheckedSpanMut]. Indexed access is validated and returns a [PppError] (via
//!    [CheckedAccess::at]) instead of reading past the end. Every indexed access also
//!    writes a short trace line to `stderr`, so you can *see* which accessor ran.
//! 2. Error helpers: [error], [error_with_str], [error_with_int], [simple_error] and the
//!    configurable [expect] family (see [ErrorAction]).
//! 3. Narrowing: [narrow_cast] (plain `as` cast with a clearer name) and [narrow] (cast,
//!    then verify that nothing was lost).
//! 4. Random numbers: [RandomSource] plus the process wide [random_int] and [seed]
//!    functions.
//! 5. Logging: [try_initialize_logging_global] and
//!    [try_initialize_logging_thread_local] set up [tracing] output.
//!
//! # Example
//!
//! ```
//! use r3bl_ppp::{checked_vec, narrow, CheckedString, PppError, PppResult};
//!
//! fn run() -> PppResult<()> {
//!     let v = checked_vec![1, 2, 3];
//!     assert_eq!(*v.at(1)?, 2);
//!     assert!(matches!(v.at(3), Err(PppError::OutOfRange { index: 3, len: 3 })));
//!
//!     let s = CheckedString::from("abc");
//!     assert!(s.at(5).is_err());
//!
//!     let small: u8 = narrow(200_i32)?;
//!     assert_eq!(small, 200);
//!     assert!(narrow::<u8, _>(300_i32).is_err());
//!     Ok(())
//! }
//!
//! run().unwrap();
//! ```

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![warn(clippy::all)]
#![warn(rust_2018_idioms)]
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod checked_access;
pub mod checked_span;
pub mod checked_string;
pub mod checked_vec;
pub mod decl_macros;
pub mod expect;
pub mod log_support;
pub mod narrow;
pub mod ppp_error;
pub mod random;
pub mod type_aliases;

// Re-export.
pub use checked_access::*;
pub use checked_span::*;
pub use checked_string::*;
pub use checked_vec::*;
pub use expect::*;
pub use log_support::*;
pub use narrow::*;
pub use ppp_error::*;
pub use random::*;
pub use type_aliases::*;
