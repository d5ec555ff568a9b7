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

//! # Expectation checks
//!
//! Check that a condition holds, and choose (per call site) what happens when it
//! doesn't. The choice is an [ErrorAction]:
//!
//! | [ErrorAction]               | Predicate evaluated | On `false`                                |
//! |-----------------------------|---------------------|-------------------------------------------|
//! | [ErrorAction::Ignore]       | no                  | nothing                                   |
//! | [ErrorAction::Logging]      | yes                 | `expect() error: <mess>` on `stderr`      |
//! | [ErrorAction::Throwing]     | yes                 | `Err(`[PppError::Expect]`)`               |
//! | [ErrorAction::Terminating]  | yes                 | [std::process::abort]                     |
//! | [ErrorAction::Error]        | yes                 | `Err(`[PppError::General]`)` via [error]  |
//!
//! There are three ways to call it, and they all behave the same:
//! 1. [expect] uses [DEFAULT_ERROR_ACTION].
//! 2. [expect_with] picks the action at compile time, using one of the zero sized types
//!    in [policy]. Each policy is a separate instantiation, so there is no runtime
//!    branch on the action.
//! 3. [expect_action] picks the action at runtime, eg, from a config string parsed with
//!    [std::str::FromStr].
//!
//! ```
//! use r3bl_ppp::{expect, expect_with, policy, PppError};
//!
//! let x = 5;
//! assert!(expect(|| x > 0, "x must be positive").is_ok());
//! assert_eq!(
//!     expect(|| x > 10, "x must be big"),
//!     Err(PppError::General("x must be big".into()))
//! );
//! assert_eq!(
//!     expect_with::<policy::Throwing>(|| x > 10, "x must be big"),
//!     Err(PppError::Expect("x must be big".into()))
//! );
//! assert!(expect_with::<policy::Ignore>(|| x > 10, "x must be big").is_ok());
//! ```

use std::io::Write;

use crate::{PppError, PppResult, error};

/// What to do when an expectation does not hold. See the [module docs](self).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorAction {
    Ignore,
    Throwing,
    Terminating,
    Logging,
    #[default]
    Error,
}

/// The action used by [expect].
pub const DEFAULT_ERROR_ACTION: ErrorAction = ErrorAction::Error;

/// Prefix of the line that [ErrorAction::Logging] writes to `stderr`.
pub const EXPECT_LOG_PREFIX: &str = "expect() error: ";

/// Compile time selection of an [ErrorAction]. Implemented by the types in [policy].
pub trait ErrorPolicy {
    const ACTION: ErrorAction;
}

/// Zero sized types, one per [ErrorAction], for use with [expect_with].
pub mod policy {
    use super::{ErrorAction, ErrorPolicy};

    macro_rules! define_policy {
        ($name:ident => $action:ident) => {
            #[derive(Debug, Clone, Copy, Default)]
            pub struct $name;

            impl ErrorPolicy for $name {
                const ACTION: ErrorAction = ErrorAction::$action;
            }
        };
    }

    define_policy!(Ignore => Ignore);
    define_policy!(Throwing => Throwing);
    define_policy!(Terminating => Terminating);
    define_policy!(Logging => Logging);
    define_policy!(RaiseError => Error);

    /// The policy that [super::expect] uses.
    pub type DefaultPolicy = RaiseError;
}

/// Check `cond` using [DEFAULT_ERROR_ACTION].
///
/// # Errors
///
/// [PppError::General] carrying `mess` if `cond` returns `false`.
pub fn expect(cond: impl FnOnce() -> bool, mess: &str) -> PppResult<()> {
    expect_with::<policy::DefaultPolicy>(cond, mess)
}

/// Check `cond` using the [ErrorAction] of policy `P`, chosen at compile time.
///
/// # Errors
///
/// Depends on `P`, see the [module docs](self).
pub fn expect_with<P: ErrorPolicy>(
    cond: impl FnOnce() -> bool,
    mess: &str,
) -> PppResult<()> {
    expect_action(P::ACTION, cond, mess)
}

/// Check `cond` using an [ErrorAction] chosen at runtime.
///
/// # Errors
///
/// - [ErrorAction::Throwing]: [PppError::Expect] carrying `mess` if `cond` is `false`.
/// - [ErrorAction::Error]: [PppError::General] carrying `mess` if `cond` is `false`.
/// - Never for the other actions.
pub fn expect_action(
    action: ErrorAction,
    cond: impl FnOnce() -> bool,
    mess: &str,
) -> PppResult<()> {
    // The predicate is not even evaluated when the expectation is ignored.
    if matches!(action, ErrorAction::Ignore) || cond() {
        return Ok(());
    }

    match action {
        ErrorAction::Ignore => Ok(()),
        ErrorAction::Logging => {
            tracing::warn!(message = "expectation failed", expectation = %mess);
            let mut stderr = std::io::stderr().lock();
            _ = writeln!(stderr, "{EXPECT_LOG_PREFIX}{mess}");
            Ok(())
        }
        ErrorAction::Throwing => Err(PppError::Expect(mess.to_string())),
        ErrorAction::Terminating => {
            tracing::error!(message = "expectation failed, aborting", expectation = %mess);
            std::process::abort()
        }
        ErrorAction::Error => error(mess),
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, str::FromStr};

    use strum::IntoEnumIterator;
    use test_case::test_case;

    use super::*;
    use crate::assert_eq2;

    /// Every action except [ErrorAction::Terminating], which ends the process. That one
    /// is covered by `ppp_test_bin`.
    const NON_TERMINATING: [ErrorAction; 4] = [
        ErrorAction::Ignore,
        ErrorAction::Throwing,
        ErrorAction::Logging,
        ErrorAction::Error,
    ];

    #[test]
    fn test_default_action_is_error() {
        assert_eq2!(DEFAULT_ERROR_ACTION, ErrorAction::Error);
        assert_eq2!(ErrorAction::default(), DEFAULT_ERROR_ACTION);
        assert_eq2!(
            <policy::DefaultPolicy as ErrorPolicy>::ACTION,
            DEFAULT_ERROR_ACTION
        );
    }

    #[test]
    fn test_ignore_never_evaluates_or_fails() {
        let calls = Cell::new(0);
        for outcome in [true, false] {
            let result = expect_with::<policy::Ignore>(
                || {
                    calls.set(calls.get() + 1);
                    outcome
                },
                "ignored",
            );
            assert_eq2!(result, Ok(()));
        }
        assert_eq2!(calls.get(), 0);
    }

    #[test]
    fn test_raise_error_fails_exactly_when_false() {
        assert_eq2!(expect_with::<policy::RaiseError>(|| true, "fine"), Ok(()));
        assert_eq2!(
            expect_with::<policy::RaiseError>(|| false, "broken"),
            Err(PppError::General("broken".into()))
        );
        assert_eq2!(
            expect(|| false, "broken"),
            Err(PppError::General("broken".into()))
        );
    }

    #[test]
    fn test_throwing_uses_distinct_error() {
        assert_eq2!(expect_with::<policy::Throwing>(|| true, "fine"), Ok(()));
        assert_eq2!(
            expect_with::<policy::Throwing>(|| false, "broken"),
            Err(PppError::Expect("broken".into()))
        );
    }

    #[test]
    fn test_logging_never_fails() {
        assert_eq2!(expect_with::<policy::Logging>(|| false, "logged"), Ok(()));
        assert_eq2!(expect_with::<policy::Logging>(|| true, "logged"), Ok(()));
    }

    #[test]
    fn test_true_predicate_never_fails_for_any_action() {
        for action in NON_TERMINATING {
            assert_eq2!(expect_action(action, || true, "ok"), Ok(()));
        }
        // Terminating only aborts when the predicate is false.
        assert_eq2!(
            expect_with::<policy::Terminating>(|| true, "ok"),
            Ok(())
        );
    }

    #[test]
    fn test_runtime_and_compile_time_forms_agree() {
        for outcome in [true, false] {
            assert_eq2!(
                expect_action(ErrorAction::Ignore, || outcome, "m"),
                expect_with::<policy::Ignore>(|| outcome, "m")
            );
            assert_eq2!(
                expect_action(ErrorAction::Throwing, || outcome, "m"),
                expect_with::<policy::Throwing>(|| outcome, "m")
            );
            assert_eq2!(
                expect_action(ErrorAction::Logging, || outcome, "m"),
                expect_with::<policy::Logging>(|| outcome, "m")
            );
            assert_eq2!(
                expect_action(ErrorAction::Error, || outcome, "m"),
                expect_with::<policy::RaiseError>(|| outcome, "m")
            );
        }
    }

    #[test_case("ignore", ErrorAction::Ignore)]
    #[test_case("throwing", ErrorAction::Throwing)]
    #[test_case("terminating", ErrorAction::Terminating)]
    #[test_case("logging", ErrorAction::Logging)]
    #[test_case("error", ErrorAction::Error)]
    fn test_error_action_from_config_string(input: &str, expected: ErrorAction) {
        assert_eq2!(ErrorAction::from_str(input), Ok(expected));
        assert_eq2!(expected.to_string(), input);
    }

    #[test]
    fn test_error_action_iter_and_unknown_string() {
        assert_eq2!(ErrorAction::iter().count(), 5);
        assert!(ErrorAction::from_str("explode").is_err());
    }
}
